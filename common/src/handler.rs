//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Everything in the platform is expressed through this trait: repository
/// operations, commands and queries of the service, mail deliveries and
/// background tasks. `Args` describes the operation being handled.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
