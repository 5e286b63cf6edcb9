// Line-based controller trace format.
//
// One step per line, `#` starts a comment. A line may start with `left:` or
// `right:` to pick the controller (right when omitted):
//
// ```text
// trigger down|up
// grip down|up
// button a|b|x|y
// stick press
// stick X Y
// pose PX PY PZ [YAW_DEG PITCH_DEG]   # sets the pose and advances one frame
// frames N                            # advance N frames holding both poses
// ```

use anyhow::{anyhow, bail, Context};
use glam::{EulerRot, Quat, Vec3};
use paint_core::{Button, Hand, InputEvent, Pose};

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Event { hand: Hand, event: InputEvent },
    Pose { hand: Hand, pose: Pose },
    Frames(u32),
}

fn number(word: Option<&str>, what: &str) -> anyhow::Result<f32> {
    let word = word.ok_or_else(|| anyhow!("missing {what}"))?;
    word.parse::<f32>()
        .with_context(|| format!("bad {what} {word:?}"))
}

fn up_down(word: Option<&str>) -> anyhow::Result<bool> {
    match word {
        Some("down") => Ok(true),
        Some("up") => Ok(false),
        other => bail!("expected down or up, got {other:?}"),
    }
}

pub fn parse_line(line: &str) -> anyhow::Result<Option<Step>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (hand, rest) = match line.split_once(':') {
        Some(("left", rest)) => (Hand::Left, rest),
        Some(("right", rest)) => (Hand::Right, rest),
        Some((other, _)) => bail!("unknown hand {other:?}"),
        None => (Hand::Right, line),
    };
    let mut words = rest.split_whitespace();
    let event = |event: InputEvent| -> anyhow::Result<Option<Step>> {
        Ok(Some(Step::Event { hand, event }))
    };
    match words.next() {
        Some("trigger") => event(if up_down(words.next())? {
            InputEvent::TriggerDown
        } else {
            InputEvent::TriggerUp
        }),
        Some("grip") => event(if up_down(words.next())? {
            InputEvent::GripDown
        } else {
            InputEvent::GripUp
        }),
        Some("button") => {
            let button = match words.next() {
                Some("a") => Button::A,
                Some("b") => Button::B,
                Some("x") => Button::X,
                Some("y") => Button::Y,
                other => bail!("unknown button {other:?}"),
            };
            event(InputEvent::Button(button))
        }
        Some("stick") => match words.next() {
            Some("press") => event(InputEvent::ThumbstickPress),
            x => {
                let x = number(x, "stick x")?;
                let y = number(words.next(), "stick y")?;
                event(InputEvent::ThumbstickMove { x, y })
            }
        },
        Some("pose") => {
            let px = number(words.next(), "x")?;
            let py = number(words.next(), "y")?;
            let pz = number(words.next(), "z")?;
            let yaw = words.next().map(|w| number(Some(w), "yaw")).transpose()?;
            let pitch = words.next().map(|w| number(Some(w), "pitch")).transpose()?;
            let orientation = Quat::from_euler(
                EulerRot::YXZ,
                yaw.unwrap_or(0.0).to_radians(),
                pitch.unwrap_or(0.0).to_radians(),
                0.0,
            );
            Ok(Some(Step::Pose {
                hand,
                pose: Pose::new(Vec3::new(px, py, pz), orientation),
            }))
        }
        Some("frames") => {
            let word = words.next().ok_or_else(|| anyhow!("missing frame count"))?;
            let n = word
                .parse::<u32>()
                .with_context(|| format!("bad frame count {word:?}"))?;
            Ok(Some(Step::Frames(n)))
        }
        Some(other) => bail!("unknown command {other:?}"),
        None => bail!("missing command after hand"),
    }
}

pub fn parse_script(src: &str) -> anyhow::Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (i, line) in src.lines().enumerate() {
        if let Some(step) = parse_line(line).with_context(|| format!("line {}", i + 1))? {
            steps.push(step);
        }
    }
    Ok(steps)
}
