pub mod dry_run;
pub mod traits;

pub use dry_run::DryRunExecutor;
pub use traits::TransactionExecutor;
