//! CrudService: the generic controller instantiated once per entity.

mod crud;
pub use crud::CrudService;
