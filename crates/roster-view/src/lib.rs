//! Employee management view-model.
//!
//! Drives the roster mock service through a [`Transport`]:
//! - [`EmployeeClient`]: typed list/get/create/update/delete calls
//! - [`EmployeeView`]: employee list plus one create/edit form
//! - [`render`]: plain-text form and table

pub mod client;
pub mod error;
pub mod render;
pub mod transport;
pub mod view;

pub use client::EmployeeClient;
pub use error::{ClientError, ClientResult};
pub use transport::{InProcessTransport, Transport, TransportError};
pub use view::{EmployeeView, FormMode};
