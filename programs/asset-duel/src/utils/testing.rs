use anchor_lang::error::Error;
use anchor_lang::Result;
use crate::errors::DuelError;

pub fn assert_duel_err<T: std::fmt::Debug>(result: Result<T>, expected: DuelError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
