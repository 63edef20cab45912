use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use aspect_resize::{
    HostNode, ResizeParams, ResizePlan, ResizeToAspectNode, kernel_capabilities, plan_resize,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    // Logs go to stderr so JSON on stdout stays machine-readable
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn positive(arg: &'static str, value: i64) -> Result<usize, AppError> {
    if value <= 0 {
        return Err(AppError::NonPositive { arg, value });
    }
    Ok(value as usize)
}

/// Layer explicit flags over the preset file (or defaults).
fn build_params(args: &CliArgs) -> Result<ResizeParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading preset: {:?}", path);
            ResizeParams::from_json_file(path)?
        }
        None => ResizeParams::default(),
    };

    if let Some(w) = args.original_width {
        params.original_width = positive("--original-width", w)?;
    }
    if let Some(h) = args.original_height {
        params.original_height = positive("--original-height", h)?;
    }
    if let Some(t) = args.target_resolution {
        params.target_resolution = positive("--target-resolution", t)?;
    }
    if let Some(mode) = args.align_mode {
        params.align_mode = mode;
    }
    if let Some(kernel) = args.interpolation {
        params.interpolation = kernel;
    }

    debug!("Effective parameters: {:?}", params);
    Ok(params)
}

fn format_plan(plan: &ResizePlan) -> String {
    let align_corners = match plan.options.align_corners {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    };
    format!(
        "Original size: {}\nAlign mode: {}\nTarget size: {}\nInterpolation: {} (antialias={}, align_corners={})",
        plan.original,
        plan.align_mode,
        plan.target,
        plan.interpolation,
        plan.options.antialias,
        align_corners
    )
}

fn format_kernel_table() -> String {
    let mut out = format!("{:<14} {:<10} {}", "kernel", "antialias", "align-corners");
    for row in kernel_capabilities() {
        out.push('\n');
        out.push_str(&format!(
            "{:<14} {:<10} {}",
            row.kernel.name(),
            if row.supports_antialias { "yes" } else { "no" },
            if row.supports_align_corners { "yes" } else { "no" }
        ));
    }
    out
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    if args.schema {
        let schema = ResizeToAspectNode.schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    if args.kernels {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&kernel_capabilities())?);
        } else {
            println!("{}", format_kernel_table());
        }
        return Ok(());
    }

    let params = build_params(&args)?;
    let plan = plan_resize(&params).map_err(AppError::from)?;
    info!("Planned {} -> {}", plan.original, plan.target);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan).map_err(AppError::from)?);
    } else {
        println!("{}", format_plan(&plan));
    }
    Ok(())
}
