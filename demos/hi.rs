/// Hi — the smallest useful play: print 72, then 105.
///
/// Two characters enter, Juliet is set to 64 + 8 and printed as text ('H'),
/// Hamlet to Juliet + 32 + 1 and printed ('i'), and everyone leaves. The
/// script lands in ./play.spl.
///
/// Run with: cargo run --example hi

use playbill::core::play::{Act, IoType, Play, PlayError};
use playbill::schema::value::Value;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PlayError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let mut play = Play::new("Hi? Hi.").with_seed(2026);
    let hamlet = play.character("Hamlet", "a male.");
    let juliet = play.character("Juliet", "a female.");

    let mut act = Act::new("I", "The Only Act.");
    act.scene("sceneI", "I", "The Only Scene.", move |ctx| {
        ctx.enter(&[hamlet, juliet])?;
        ctx.set(juliet, Value::sum(64, 8))?;
        ctx.print(juliet, IoType::Text)?;
        ctx.set(hamlet, Value::sum(juliet, Value::sum(32, 1)))?;
        ctx.print(hamlet, IoType::Text)?;
        ctx.exit(&[])?;
        Ok(())
    });
    play.add_act(act);

    play.save("play.spl")?;
    println!("wrote play.spl");
    Ok(())
}
