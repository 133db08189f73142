//! Lays out a toolbar row and prints the frames.
//!
//! Run with `RUST_LOG=framelayout_layout=trace` to see each distribution
//! round.

use framelayout::{
    Alignment, Arrangement, Axis, DistributionPolicy, EdgeInsets, FrameLayout, LayoutConfig,
    LayoutError, Size, SizeBounds,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), LayoutError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = LayoutConfig::new(Axis::Horizontal)
        .with_spacing(8.0)
        .with_padding(EdgeInsets::symmetric(12.0, 4.0))
        .with_policy(DistributionPolicy::Proportional)
        .with_arrangement(Arrangement::new(Alignment::Center, Alignment::Center));

    let mut toolbar = FrameLayout::new(config);
    let back = toolbar.add_view("back", SizeBounds::new(32.0, 32.0, 24.0, 24.0)?);
    let title = toolbar.add_view("title", SizeBounds::new(80.0, 400.0, 0.0, 24.0)?);
    let search = toolbar.add_view("search", SizeBounds::new(120.0, 240.0, 0.0, 32.0)?);
    toolbar.set_weight(title, Some(2.0))?;
    toolbar.set_weight(search, Some(1.0))?;
    toolbar.set_weight(back, Some(0.0))?;

    println!("fitting size: {:?}", toolbar.fitting_size());

    for width in [200.0, 480.0, 1024.0] {
        let report = toolbar.layout(Size::new(width, 40.0))?;
        println!("width {width}: satisfied={}", report.is_satisfied());
        for (id, frame) in toolbar.frames() {
            let name = toolbar.view(id).copied().unwrap_or("?");
            println!(
                "  {name:<8} x={:>6.1} y={:>5.1} w={:>6.1} h={:>5.1}",
                frame.x, frame.y, frame.width, frame.height
            );
        }
    }

    Ok(())
}
