//! Geometry, scene model and pointer-interaction engine for the site-plan
//! editor.
//!
//! Every plan object is an asymmetric trapezoid: an anchor plus four
//! independent extents. This crate owns hit-testing, the z-order-aware
//! selection cycle, the eight resize handles, pan/zoom, and the state machine
//! that turns raw pointer events into shape mutations. It compiles to
//! WebAssembly for the browser host, which only wires DOM events to the
//! engine, reacts to the returned [`engine::Action`]s, and handles files.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Object store, layers, selection, z-order and area queries |
//! | [`doc`] | Plan objects, layers and typed property edits |
//! | [`geometry`] | Trapezoid vertices, containment, resize rules, text contrast |
//! | [`hit`] | Resize handles and handle hit-testing |
//! | [`camera`] | Pan/zoom view transform and grid placement |
//! | [`input`] | Modes, input event types and the gesture state machine |
//! | [`document`] | JSON plan document, legacy upgrade, load errors |
//! | [`catalog`] | Categories and default size/color/name tables |
//! | [`config`] | Plan-wide settings stored with the document |
//! | [`render`] | Canvas2D drawing |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum extent, etc.) |

pub mod camera;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod document;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
