//! Snapshot tests using the insta crate.
//!
//! Snapshots are kept inline. To update them after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{SpyRecorder, TestTargetBuilder};
use shotboard::input::Modifiers;
use shotboard::region::{TAG_COMMAND, Tags};
use shotboard::settings::Settings;
use shotboard::types::Point;

#[test]
fn snapshot_default_settings() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&Settings::default())?;
    insta::assert_snapshot!(json, @r#"
    {
      "bounds_clamping": false,
      "debug_mode": false,
      "display_width": 640.0,
      "display_height": 480.0,
      "resample_filter": "nearest"
    }
    "#);
    Ok(())
}

#[test]
fn snapshot_parsed_commands() {
    let tags: Tags = [(TAG_COMMAND, "play_sound(sounds/beep.wav); animate ;reset()")]
        .into_iter()
        .collect();
    insta::assert_json_snapshot!(tags.commands(), @r#"
    [
      {
        "name": "play_sound",
        "args": [
          "sounds/beep.wav"
        ]
      },
      {
        "name": "animate",
        "args": []
      },
      {
        "name": "reset",
        "args": []
      }
    ]
    "#);
}

#[test]
fn snapshot_drag_move_events() {
    let recorder = SpyRecorder::new();
    let mut target = TestTargetBuilder::new()
        .with_rect(0.0, 0.0, 100.0, 100.0)
        .with_recorder(recorder.clone())
        .build();
    let settings = Settings::default();

    target.on_pointer_pressed(Point::new(50.0, 50.0));
    target.on_pointer_dragged(Point::new(70.0, 65.0), Modifiers::none(), &settings);
    target.on_pointer_dragged(Point::new(80.0, 65.0), Modifiers::none(), &settings);
    target.on_pointer_released();

    insta::assert_json_snapshot!(recorder.events(), { "[].target" => "[target]" }, @r#"
    [
      {
        "event": "moved",
        "target": "[target]",
        "x": 20,
        "y": 15
      },
      {
        "event": "moved",
        "target": "[target]",
        "x": 30,
        "y": 15
      }
    ]
    "#);
}
