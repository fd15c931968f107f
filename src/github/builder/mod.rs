pub mod create_release_builder;

use crate::http::Error;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output, Error>;
}
