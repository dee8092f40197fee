// Domain-layer modules and shared errors/models
pub mod models {
    pub use crate::models::*;
}

pub mod store {
    pub use crate::store::*;
}

pub mod scoring {
    pub use crate::scoring::*;
}

pub mod filter {
    pub use crate::filter::*;
}

pub mod errors {
    pub use crate::errors::*;
}
