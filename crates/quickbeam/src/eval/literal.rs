//! Constant evaluation

use crate::{Constant, Context, EvalError};

use super::Evaluate;

impl Evaluate for Constant {
    fn evaluate(&self, _ctx: &Context) -> i64 {
        self.value
    }

    fn try_evaluate(&self, _ctx: &Context) -> Result<i64, EvalError> {
        Ok(self.value)
    }
}
