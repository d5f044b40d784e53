//! External converter invocation (markdown in, groff man page out).

use std::sync::Arc;

use crate::error::ConvertError;
use crate::exec::Executor;

/// Handle to the external markdown → man converter.
///
/// The converter is a single text transformation: the final markdown is
/// written to its stdin and the rendered page is read from its stdout.
pub struct Converter {
    program: String,
    args: Vec<String>,
    executor: Arc<dyn Executor>,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("executor", &"<dyn Executor>")
            .finish()
    }
}

impl Converter {
    /// Create a converter handle for `program` with a fixed argument list.
    pub fn new(program: impl Into<String>, args: &[String], executor: Arc<dyn Executor>) -> Self {
        Self {
            program: program.into(),
            args: args.to_vec(),
            executor,
        }
    }

    /// The converter program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check if the converter program is available on PATH.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.executor.which(&self.program)
    }

    /// Convert `input` markdown, returning the rendered page text.
    ///
    /// # Errors
    ///
    /// Returns an error if the converter process cannot be spawned or exits
    /// non-zero.
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        let result = self
            .executor
            .run_with_input(&self.program, &args, input)
            .map_err(|e| ConvertError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !result.success {
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                code: result.code,
                stderr: result.stderr.trim().to_string(),
            });
        }
        Ok(result.stdout)
    }
}
