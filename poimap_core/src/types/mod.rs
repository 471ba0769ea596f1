mod geo_bbox;
mod geom_kind;
mod new_poi;
mod poi_attributes;
mod poi_collection;
mod poi_feature;

pub use geo_bbox::*;
pub use geom_kind::*;
pub use new_poi::*;
pub use poi_attributes::*;
pub use poi_collection::*;
pub use poi_feature::*;
