use egui::{Context, Event, Key, Modifiers};
use input_core::{Clock, EditController, EditKey, GlyphMetrics, KeyAction};

const LOG_TARGET: &str = "gfx.input";

/// Editing key for an egui key, if the edit engine handles it.
pub fn edit_key_for(key: Key, modifiers: Modifiers) -> Option<EditKey> {
    match key {
        Key::ArrowLeft => Some(EditKey::Left),
        Key::ArrowRight => Some(EditKey::Right),
        Key::Home => Some(EditKey::Home),
        Key::End => Some(EditKey::End),
        Key::Backspace => Some(EditKey::Backspace),
        Key::Delete => Some(EditKey::Delete),
        Key::A if modifiers.command => Some(EditKey::SelectAll),
        _ => None,
    }
}

/// Feed this frame's keyboard and text events to the focused field.
///
/// Call once per frame before any input box is drawn, so the boxes paint the
/// edited state. Returns `true` if any field changed.
pub fn route_frame_input<M: GlyphMetrics, C: Clock>(
    ctx: &Context,
    controller: &mut EditController<M, C>,
) -> bool {
    if controller.focused().is_none() {
        return false;
    }

    let events = ctx.input(|i| i.events.clone());
    let mut changed = false;

    for evt in &events {
        match evt {
            Event::Text(t) => {
                for ch in t.chars() {
                    match controller.handle_char(ch) {
                        Ok(outcome) => changed |= outcome.is_applied(),
                        Err(err) => {
                            log::debug!(target: LOG_TARGET, "dropped {ch:?}: {err}");
                        }
                    }
                }
            }
            Event::Key {
                key,
                pressed,
                repeat,
                modifiers,
                ..
            } => {
                let Some(edit_key) = edit_key_for(*key, *modifiers) else {
                    continue;
                };
                let action = match (*pressed, *repeat) {
                    (false, _) => KeyAction::Release,
                    (true, true) => KeyAction::Repeat,
                    (true, false) => KeyAction::Press,
                };
                changed |= controller
                    .handle_key(edit_key, action, modifiers.shift)
                    .is_applied();
            }
            _ => {}
        }
    }

    if changed {
        log::trace!(target: LOG_TARGET, "frame input edited {:?}", controller.focused());
    }
    changed
}
