// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          current / list / switch
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |         switcher          |
//!              |  guards, memoized loads   |
//!              '-+-----+------+-----+-----+-'
//!                |     |      |     |     |
//!                v     v      v     v     v
//!            store  environment notify hooks cache
//!           get/set  registry   msgs  events flush
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod cache;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod environment;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod notify;
pub mod store;
pub mod switcher;
