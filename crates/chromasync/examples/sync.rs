use std::error::Error;
use std::sync::Arc;

use chromasync::opt::{Options, Reentrancy};
use chromasync::{ColorState, Hsl, Lab, Outcome, Rgb, Session, Xyz};

fn show(label: &str, state: &ColorState) {
    println!(
        "{:>8}: {}  ({:#})  xyz {}  lab {}  hsl {}{}",
        label,
        state.rgb(),
        state.rgb(),
        state.xyz(),
        state.lab(),
        state.hsl(),
        if state.clipped() { "  clipped!" } else { "" }
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::builder()
        .seed("#4ea6ff".parse()?)
        .reentrancy(Reentrancy::Queue)
        .build();
    let session = Arc::new(Session::with_options(options));
    show("seed", &session.state());

    // Mimic a widget that writes the synchronized sRGB value back and thereby
    // issues an edit of its own. The session defers it instead of recursing
    // and drops it once it no longer changes anything.
    let widget = Arc::downgrade(&session);
    session.subscribe(move |state: &ColorState| {
        show("observed", state);
        if let Some(session) = widget.upgrade() {
            match session.apply_edit(state.rgb()) {
                Ok(Outcome::Deferred) => println!("{:>8}: write-back deferred", "widget"),
                Ok(Outcome::Coalesced) => println!("{:>8}: write-back settled", "widget"),
                _ => {}
            }
        }
    });

    session.apply_edit(Rgb::new(215, 40, 39))?;
    session.apply_edit(Xyz::new(0.0, 0.0, 200.0))?;
    session.apply_edit(Lab::new(50.0, 100.0, -120.0))?;
    session.apply_edit(Hsl::new(120.0, 100.0, 25.0))?;
    session.reset()?;
    show("final", &session.state());

    Ok(())
}
