//! liftkit - operator toolkit for GameLift fleets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── connect       # Fleet -> instance -> credentials -> env.sh
//! │   ├── builds        # List and purge builds
//! │   ├── capacity      # Update fleet capacity
//! │   ├── node          # Download a Node.js runtime archive
//! │   ├── completions   # Shell completions
//! │   └── output        # Console styling helpers
//! └── core/             # Core library components
//!     ├── config        # liftkit.toml
//!     ├── plane/        # ControlPlane trait + GameLift client
//!     ├── connect       # Resolver, exchanger, workflow
//!     ├── env_script    # Environment script rendering
//!     ├── builds        # Build purge
//!     ├── capacity      # Capacity validation
//!     └── node          # Runtime archive download
//! ```

pub mod cli;
pub mod core;
pub mod error;
