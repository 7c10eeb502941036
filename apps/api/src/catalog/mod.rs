// Reference catalogs: materials, labor roles, equipment and machinery.
// Flat rows with a price/cost column; projects reference them only from inside their JSON blob.

pub mod handlers;
pub mod matcher;
pub mod repository;
