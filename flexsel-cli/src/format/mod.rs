//! This module defines logic to serialize/deserialize the asset catalog, selection requests
//! and selection results in json format.

mod entities;
pub use self::entities::*;

mod serializer;
pub use self::serializer::*;
