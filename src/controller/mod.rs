//! Controller module - Application logic and event handling
//!
//! The controller handles user input and coordinates the model with the
//! OMDb client. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `browse`: Fetch orchestration and watched-list mutations

mod input;
mod browse;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, OmdbClient};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) omdb: OmdbClient,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, omdb: OmdbClient) -> Self {
        Self { model, omdb }
    }
}
