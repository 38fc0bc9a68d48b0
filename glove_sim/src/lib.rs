//! # glove_sim
//!
//! Interactive simulator for the Signal sign-language glove: a virtual
//! sensor rig (five flex channels, three orientation axes) drives the
//! letter classifier and two live renderings — a simulated phone screen
//! and a schematic hand pose — inside one software-rendered window.
//!
//! ## Event cycle
//!
//! Every input event runs the same synchronous chain: frame update →
//! classification → transcript update → redraw.  Nothing is asynchronous
//! past the keyboard thread, and the renderers are pure functions that
//! draw through the [`canvas::Canvas`] command trait.
//!
//! ## Keyboard controls
//!
//! | Key | Action |
//! |---|---|
//! | `A`–`Z` | Apply that letter's canonical sensor preset |
//! | `Tab` / `Shift+Tab` | Select next / previous channel |
//! | `Up` / `Down` | Adjust the selected channel (hold to repeat) |
//! | `Shift+Up` / `Shift+Down` | Adjust in big steps |
//! | `Backspace` | Reset to the neutral pose, clear the transcript |
//! | `Escape` | Quit |

pub mod app;
pub mod canvas;
pub mod hand;
pub mod input;
pub mod phone;
pub mod visualizer;
