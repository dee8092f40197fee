//! Client-side integrations with a running backend.

pub mod api_client {
    pub use crate::api_client::*;
}

pub mod export {
    pub use crate::export::*;
}

pub mod seed {
    pub use crate::seed::*;
}
