pub mod constants;
pub mod error;
pub mod generate;
pub mod inventory;
pub mod layout;
pub mod output;
pub mod paths;

#[macro_export]
macro_rules! exit {
    ($err:expr, $($arg:tt)*) => {
        {
            tracing::error!($($arg)*);
            anyhow::bail!($err)
        }
    };
}
