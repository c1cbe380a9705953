//! Wordle Tiles
//!
//! A Wordle game engine: a two-pass letter feedback evaluator, a turn state
//! machine gated by per-tile pop, shake and flip animations, and a terminal
//! front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tiles::config::GameConfig;
//! use wordle_tiles::core::{Word, evaluate};
//! use wordle_tiles::game::{GameEngine, InputEvent};
//! use wordle_tiles::wordlists::Dictionary;
//!
//! // Score a single guess
//! let feedback = evaluate("allow", "llama").unwrap();
//! assert_eq!(feedback.to_string(), "YGY--");
//!
//! // Drive a session frame by frame
//! let dictionary = Dictionary::embedded().unwrap();
//! let secret = Word::new("crane").unwrap();
//! let mut engine = GameEngine::with_secret(&dictionary, GameConfig::default(), secret);
//! let typed = "crane".chars().map(InputEvent::Letter);
//! engine.tick(typed.chain([InputEvent::Submit]), 1.0 / 60.0);
//! assert!(engine.is_revealing());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Tunables
pub mod config;

// Per-tile animation state machines
pub mod animation;

// Turn state machine and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
