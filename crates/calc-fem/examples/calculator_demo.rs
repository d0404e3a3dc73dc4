//! Calculator Page Demo
//!
//! Drives the mock page through a short session: a chained calculation,
//! a correction with DEL, a division by zero, and a theme change that
//! survives a reload.
//!
//! Run with: cargo run --example calculator_demo

use calc_fem::prelude::*;

fn show(dispatcher: &MockDispatcher) {
    println!(
        "   previous: {:>24}   current: {:>24}",
        format!("{:?}", dispatcher.display_text(DisplayRegion::Previous)),
        format!("{:?}", dispatcher.display_text(DisplayRegion::Current)),
    );
}

fn click_all(dispatcher: &mut MockDispatcher, ids: &[&str]) -> CalcResult<()> {
    for id in ids {
        dispatcher.click(id)?;
    }
    Ok(())
}

fn main() -> CalcResult<()> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            calc-fem Demo - Mock Page Session                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut dispatcher = MockDispatcher::default();
    let theme = dispatcher.init();
    println!("Initial theme: {theme} (toggle {:?})", dispatcher.surface().toggle_classes());

    println!("\n1. Chained calculation: 1234 + 5 x 2 =");
    click_all(&mut dispatcher, &["btn-1", "btn-2", "btn-3", "btn-4", "btn-plus"])?;
    show(&dispatcher);
    click_all(&mut dispatcher, &["btn-5", "btn-times"])?;
    show(&dispatcher);
    click_all(&mut dispatcher, &["btn-2", "btn-equals"])?;
    show(&dispatcher);

    println!("\n2. Correction: 7.55 DEL");
    click_all(&mut dispatcher, &["btn-reset", "btn-7", "btn-decimal", "btn-5", "btn-5"])?;
    show(&dispatcher);
    dispatcher.click("btn-del")?;
    show(&dispatcher);

    println!("\n3. Division by zero: 5 / 0 =");
    click_all(&mut dispatcher, &["btn-reset", "btn-5", "btn-divide", "btn-0", "btn-equals"])?;
    show(&dispatcher);
    println!("   state holds {:?}", dispatcher.state().current_operand());

    println!("\n4. Theme 3, then reload");
    dispatcher.click("toggle-3")?;
    println!(
        "   data-theme={:?} toggle={:?}",
        dispatcher.surface().theme_attribute(),
        dispatcher.surface().toggle_classes()
    );
    let (_, storage) = dispatcher.into_parts();
    let mut reloaded = MockDispatcher::with_storage(storage);
    println!("   after reload: theme {}", reloaded.init());

    println!("\nEvent history:");
    for (i, event) in reloaded.surface().event_history().iter().enumerate() {
        println!("   [{i}] {event:?}");
    }
    Ok(())
}
