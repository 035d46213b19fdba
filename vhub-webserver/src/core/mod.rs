pub use vhub_core::{db, gateways, repositories, usecases, util};

pub mod entities {
    pub use vhub_core::entities::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*, usecases::Visibility};
}
