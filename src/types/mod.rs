/*
[INPUT]:  Type submodule definitions
[OUTPUT]: Typed enums and request structs for the v1 API
[POS]:    src/types - module wiring
[UPDATE]: When type submodules change
*/

mod enums;
mod requests;

pub use enums::*;
pub use requests::*;
