//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, configuration, asset
//! stores and utilities. Each submodule documents the semantics and intended
//! usage of its resource(s).
//!
//! Overview
//! - `animationstore` – frame sequences and rates shared across entities
//! - `audio` – bridge and channels for the background audio thread
//! - `gameconfig` – window, music and asset settings from the INI file
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – held state of the gameplay actions for the current tick
//! - `levelconfig` – spawn points and tuning of the level
//! - `levelrng` – seedable randomness for level setup
//! - `screensize` – visible area in pixels
//! - `spritestore` – pixel size of every sprite frame
//! - `worldsignals` – global flags and counters
pub mod animationstore;
pub mod audio;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod levelconfig;
pub mod levelrng;
pub mod screensize;
pub mod spritestore;
pub mod worldsignals;
