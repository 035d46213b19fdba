pub use vhub_entities::{
    address::*, comment::*, email::*, event::*, id::*, mission::*, news::*, organization::*,
    password::*, photo::*, subsidiary::*, time::*, user::*,
};
