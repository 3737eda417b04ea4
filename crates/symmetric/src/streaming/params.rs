//! Named-parameter access to a cipher context
//!
//! | name        | get          | set                          |
//! |-------------|--------------|------------------------------|
//! | `padding`   | `UInt(0/1)`  | `Bool`, `Int` or `UInt`      |
//! | `keylen`    | `UInt`       | rejected                     |
//! | `blocksize` | `UInt`       | rejected                     |
//! | `mode`      | `Utf8`       | rejected                     |
//!
//! Unknown names are left untouched on get and ignored on set.

use blockflow_api::{Param, ParamValue};
use blockflow_params::utils::names::{PARAM_BLOCK_SIZE, PARAM_KEYLEN, PARAM_MODE, PARAM_PADDING};

use super::context::CipherContext;
use crate::error::{Error, Result};

impl CipherContext {
    /// Fill every recognized entry of `params` with its current value
    pub fn get_params(&self, params: &mut [Param]) -> Result<()> {
        for param in params.iter_mut() {
            let value = match param.name.as_ref() {
                PARAM_PADDING => ParamValue::UInt(u64::from(self.padding())),
                PARAM_KEYLEN => ParamValue::UInt(self.key_len() as u64),
                PARAM_BLOCK_SIZE => ParamValue::UInt(self.block_size() as u64),
                PARAM_MODE => ParamValue::Utf8(self.mode().as_str().to_string()),
                _ => continue,
            };
            param.value = Some(value);
        }
        Ok(())
    }

    /// Apply every recognized entry of `params`
    ///
    /// All entries are checked first; if any is rejected nothing changes.
    pub fn set_params(&mut self, params: &[Param]) -> Result<()> {
        let mut padding = None;
        for param in params {
            let Some(value) = param.value.as_ref() else {
                continue;
            };
            match param.name.as_ref() {
                PARAM_PADDING => {
                    let flag = value.as_flag().ok_or(Error::InvalidParameter {
                        name: PARAM_PADDING,
                        reason: "expected a boolean or integer",
                    })?;
                    padding = Some(flag);
                }
                PARAM_KEYLEN => return Err(read_only(PARAM_KEYLEN)),
                PARAM_BLOCK_SIZE => return Err(read_only(PARAM_BLOCK_SIZE)),
                PARAM_MODE => return Err(read_only(PARAM_MODE)),
                _ => {}
            }
        }

        if let Some(flag) = padding {
            self.set_padding(flag)?;
        }
        Ok(())
    }
}

fn read_only(name: &'static str) -> Error {
    Error::InvalidParameter {
        name,
        reason: "read-only",
    }
}
