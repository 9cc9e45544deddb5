//! Client-side session core for the Room.me demo.
//!
//! This crate owns the authentication state model, its durable-slot
//! persistence, the route guard state machine and the auth form rules.
//! It has no UI dependency: `client` wires these types into Leptos signals,
//! browser storage and router navigation.
//!
//! Nothing here verifies a real credential. The only verifier shipped is a
//! placeholder behind the [`verifier::CredentialVerifier`] seam.

pub mod form;
pub mod guard;
pub mod lifetime;
pub mod route;
pub mod state;
pub mod storage;
pub mod store;
pub mod validate;
pub mod verifier;

pub use form::{AuthMode, FormError, FormStatus, LoginForm, SIMULATED_CALL_DELAY, SignupForm};
pub use guard::{GuardPolicy, RouteGuard};
pub use lifetime::ViewLifetime;
pub use route::Route;
pub use state::SessionState;
pub use storage::{DurableSlot, MemorySlot, StorageError};
pub use store::{SessionStore, StoreOptions, SubscriptionId};
pub use verifier::{AccountRegistrar, CredentialVerifier, DemoRegistrar, DemoVerifier};
