//! One [`GeneratedFile`](crudgen_core::GeneratedFile) per artifact kind.

mod controller_ts;
mod prisma_client_ts;
mod routes_ts;
mod schema_prisma;
mod service_ts;
mod types_ts;
mod validator_ts;

pub use controller_ts::ControllerTs;
pub use prisma_client_ts::PrismaClientTs;
pub use routes_ts::{RoutesIndexTs, RoutesTs};
pub use schema_prisma::SchemaPrisma;
pub use service_ts::ServiceTs;
pub use types_ts::TypesTs;
pub use validator_ts::ValidatorTs;
