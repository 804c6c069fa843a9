//! Terminal playback of the scripted chat demo.
//!
//! Simulates a user typing into the prompt, submits once, and plays the
//! whole cinematic sequence against the real clock, narrating surface
//! state to stdout along the way.

use clap::Parser;
use penpal_core::surface::Visibility as _;
use penpal_core::{Event, Key, Rect, ThoughtScript, Timing};
use penpal_widgets::demo_script::DEMO_STANZAS;
use penpal_widgets::{
    CharacterSprite, ChatDemo, DisclosurePanel, PromptInput, ThoughtBubble, TranscriptView,
};
use std::io::Write;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "penpal", about = "Play the Penpal scripted chat demo in the terminal")]
struct Cli {
    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Text to type into the prompt (discarded on submit, like the page)
    #[arg(short, long, default_value = "hello there")]
    message: String,

    /// Compress every delay for a quick run
    #[arg(long)]
    fast: bool,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn build_demo(fast: bool) -> ChatDemo {
    let mut prompt = PromptInput::new().placeholder("Ask me anything...");
    prompt.layout(Rect::new(0.0, 0.0, 480.0, 40.0));

    let mut script = ThoughtScript::new(DEMO_STANZAS);
    if fast {
        script = script.with_timing(
            Timing::default()
                .with_type_delay_ms(10)
                .with_delete_delay_ms(5)
                .with_hold_ms(300)
                .with_settle_ms(50)
                .with_exit_ms(100)
                .with_scroll_ms(150),
        );
    }

    ChatDemo::builder()
        .prompt(prompt)
        .sprite(CharacterSprite::new())
        .bubble(ThoughtBubble::new())
        .log(TranscriptView::new())
        .detail(DisclosurePanel::new("Experiment details"))
        .script(script)
        .build()
        .expect("all surfaces are provided above")
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut demo = build_demo(cli.fast);
    let started = Instant::now();
    let now_ms = move || started.elapsed().as_millis() as u64;

    // Simulate the user typing, one character per keystroke.
    demo.handle_event(now_ms(), &Event::FocusIn);
    print!("you: ");
    for ch in cli.message.chars() {
        demo.handle_event(
            now_ms(),
            &Event::TextInput {
                text: ch.to_string(),
            },
        );
        print!("{ch}");
        let _ = std::io::stdout().flush();
        std::thread::sleep(Duration::from_millis(if cli.fast { 5 } else { 40 }));
    }
    println!("  [character: {}]", demo.direction());

    demo.handle_event(now_ms(), &Event::KeyDown { key: Key::Enter });

    // Play the sequence, narrating bubble text changes.
    let mut last_bubble = String::new();
    while !demo.is_finished() {
        demo.tick(now_ms());
        if demo.bubble().text() != last_bubble {
            last_bubble = demo.bubble().text().to_string();
            print!("\r\x1b[2K  ... {last_bubble}");
            let _ = std::io::stdout().flush();
        }
        let wait = demo
            .next_deadline_ms()
            .map_or(16, |d| d.saturating_sub(now_ms()).clamp(1, 16));
        std::thread::sleep(Duration::from_millis(wait));
    }
    println!();

    // Let the fire-and-forget exit transitions and the reveal scroll run
    // their course.
    let settle_until = now_ms() + if cli.fast { 300 } else { 2000 };
    while now_ms() < settle_until {
        demo.tick(now_ms());
        std::thread::sleep(Duration::from_millis(16));
    }

    for entry in demo.log().transcript().iter() {
        println!("{:?}: {}", entry.participant, entry.content);
    }
    for (index, action) in demo.log().actions().iter().enumerate() {
        println!("  [{index}] {}", action.label);
    }
    demo.activate_action(0);
    if demo.detail().is_visible() {
        println!("  -> {} opened", demo.detail().title());
    }
}
