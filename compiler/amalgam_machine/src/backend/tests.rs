use super::*;
use pretty_assertions::assert_eq;

fn binary(op: BinOp, lhs: i64, rhs: i64) -> Result<i64, MachineError> {
    EvalBackend::new().emit_binary(op, &lhs, &rhs)
}

#[test]
fn arithmetic_and_bitwise_operators() {
    assert_eq!(binary(BinOp::Add, 2, 3), Ok(5));
    assert_eq!(binary(BinOp::Sub, 2, 3), Ok(-1));
    assert_eq!(binary(BinOp::Mul, 6, 10), Ok(60));
    assert_eq!(binary(BinOp::Div, 7, 2), Ok(3));
    assert_eq!(binary(BinOp::Rem, 7, 2), Ok(1));
    assert_eq!(binary(BinOp::BitAnd, 6, 3), Ok(2));
    assert_eq!(binary(BinOp::BitOr, 6, 3), Ok(7));
    assert_eq!(binary(BinOp::BitXor, 6, 3), Ok(5));
    assert_eq!(binary(BinOp::Shl, 1, 4), Ok(16));
    assert_eq!(binary(BinOp::Shr, 16, 4), Ok(1));
}

#[test]
fn division_by_zero_is_a_backend_error() {
    let err = binary(BinOp::Div, 1, 0);
    assert_eq!(
        err,
        Err(MachineError::Backend {
            message: "division by zero".to_owned(),
        })
    );
    assert!(binary(BinOp::Rem, 1, 0).is_err());
}

#[test]
fn assign_never_reaches_the_backend() {
    assert!(binary(BinOp::Assign, 1, 2).is_err());
}

#[test]
fn constants_and_loads_pass_values_through() {
    let mut backend = EvalBackend::new();
    let v = backend.emit_constant(true, IntWidth::W8, 65);
    assert_eq!(v, Ok(65));
    let v = backend.emit_load(&65, "r0");
    assert_eq!(v, Ok(65));
    assert_eq!(backend.emitted(), 2);
}
