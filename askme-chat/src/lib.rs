//! # askme-chat
//!
//! Chat orchestration for the `askme` assistant.
//!
//! Ties the retrieval layer and the model layer together: each user turn
//! is retrieved against the persisted index, stuffed into a fixed prompt
//! template, and answered by the configured model. A [`Session`] keeps the
//! append-only transcript for the lifetime of one interactive session.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use askme_chat::{ChatEngine, Session};
//!
//! let engine = ChatEngine::builder()
//!     .retriever(retriever)
//!     .llm(Arc::new(model))
//!     .build()?;
//!
//! let mut session = Session::new();
//! let response = engine.respond(&mut session, "what is ownership?").await?;
//! println!("{}", response.text);
//! ```

pub mod engine;
pub mod error;
pub mod prompt;
pub mod session;

pub use engine::{ChatEngine, ChatEngineBuilder, ChatResponse};
pub use error::{ChatError, Result};
pub use session::{Role, Session, Turn};
