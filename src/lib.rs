//! Canvas engine for an interactive terrace floor-plan editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the plan canvas: building the fixed architectural outline
//! and its named zones, translating raw DOM input events into furniture
//! mutations, hit-testing placed items, and rendering the scene in either a
//! technical (blueprint) or visual (humanized) palette. The host page is
//! responsible only for wiring DOM events to the engine, re-rendering when an
//! [`engine::Action`] asks for it, and presenting the property panel for the
//! selected item.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Furniture item types and the owning scene store |
//! | [`geometry`] | Fixed outline, zone polygons, and dimension segments |
//! | [`viewport`] | Viewport-pixel to scene-space coordinate conversions |
//! | [`input`] | Render mode, key events, and the drag state machine |
//! | [`hit`] | Hit-testing pointer positions against placed furniture |
//! | [`catalog`] | Furniture glyph catalog and per-mode style resolution |
//! | [`annotate`] | Dimension callout layout and drawing |
//! | [`render`] | Full-scene drawing to the 2D context |
//! | [`consts`] | Shared numeric constants (scale, clamps, scene box, etc.) |

pub mod annotate;
pub mod catalog;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
pub mod viewport;
