//! Database record models matching table schemas.
//!
//! These structs directly correspond to database table rows. Repositories
//! use them to return query results and to accept insertion/update data.
//! Database models are distinct from API models so storage and API
//! representations can evolve independently; conversion is an explicit
//! `From` impl, not anything declarative.

pub mod todos;
