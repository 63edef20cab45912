use clap::Parser;
use std::path::PathBuf;

use aspect_resize::{AlignMode, InterpolationKernel};

#[derive(Parser, Debug)]
#[command(name = "aspect-resize", version, about = "Aspect-ratio preserving resize planner")]
pub struct CliArgs {
    /// JSON preset with resize parameters; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Declared original width (aspect ratio only)
    #[arg(long)]
    pub original_width: Option<i64>,

    /// Declared original height (aspect ratio only)
    #[arg(long)]
    pub original_height: Option<i64>,

    /// Length of the aligned side in pixels
    #[arg(short, long)]
    pub target_resolution: Option<i64>,

    /// Which side is pinned to the target resolution (longer or shorter)
    #[arg(short, long, value_enum)]
    pub align_mode: Option<AlignMode>,

    /// Interpolation kernel (nearest, linear, bilinear, bicubic, trilinear, area, nearest-exact)
    #[arg(short, long, value_enum)]
    pub interpolation: Option<InterpolationKernel>,

    /// Print the plan as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the host node schema as JSON and exit
    #[arg(long, default_value_t = false)]
    pub schema: bool,

    /// Print the kernel capability matrix and exit
    #[arg(long, default_value_t = false)]
    pub kernels: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
