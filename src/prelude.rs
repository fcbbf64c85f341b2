pub use crate::data_structs::{
    AssemblyColumns,
    GeneTable,
    MissingColumns,
};
pub use crate::io::gff::{
    GffReader,
    RawGffRecord,
};
pub use crate::io::tsv::{
    TableReader,
    TableWriter,
};
pub use crate::query::{
    query_region,
    RegionQuery,
};
pub use crate::tools::extend::TableExtender;
