mod assembly;
mod table;

pub use assembly::{
    description_column,
    id_column,
    AssemblyColumns,
    MissingColumns,
    ResolvedColumns,
};
pub use table::GeneTable;

#[cfg(test)]
mod tests;
