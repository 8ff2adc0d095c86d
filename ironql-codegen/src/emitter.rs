//! The hand-off point between declaration assembly and serialization.

use crate::declaration::EmissionRequest;
use crate::error::CodegenError;

/// Consumes emission requests, one per generated declaration.
pub trait Emitter {
    /// Takes ownership of a request and serializes or stores it.
    ///
    /// # Errors
    /// Implementations return `CodegenError` if the request cannot be written.
    fn emit(&mut self, request: EmissionRequest) -> Result<(), CodegenError>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, request: EmissionRequest) -> Result<(), CodegenError> {
        (**self).emit(request)
    }
}

/// Collects requests in memory.
impl Emitter for Vec<EmissionRequest> {
    fn emit(&mut self, request: EmissionRequest) -> Result<(), CodegenError> {
        self.push(request);
        Ok(())
    }
}
