#![no_main]

use input_core::{
    AdvanceTable, EditConfig, EditController, EditKey, FieldId, FieldRect, KeyAction, ManualClock,
    PointerSample, is_printable,
};
use libfuzzer_sys::fuzz_target;

const FIELDS: [FieldId; 2] = [FieldId::from_raw(1), FieldId::from_raw(2)];
const CAPACITY: usize = 24;

fn rect_for(index: usize) -> FieldRect {
    FieldRect::new(10.0, 10.0 + 40.0 * index as f32, 90.0, 26.0)
}

fuzz_target!(|data: &[u8]| {
    let clock = ManualClock::new(0.0);
    let metrics = AdvanceTable::from_fn(|c| (c as u32 % 5 + 2) as f32);
    let config = EditConfig {
        capacity: CAPACITY,
        text_scale: 1.5,
        ..EditConfig::default()
    };
    let mut ctl = EditController::with_clock(config, metrics, &clock);

    let mut bytes = data.iter().copied();
    while let Some(op) = bytes.next() {
        let arg = bytes.next().unwrap_or(0);
        clock.advance(0.05);
        match op % 6 {
            0 => {
                let _ = ctl.handle_char(arg as char);
            }
            1 => {
                let key = match arg % 7 {
                    0 => EditKey::Left,
                    1 => EditKey::Right,
                    2 => EditKey::Home,
                    3 => EditKey::End,
                    4 => EditKey::Backspace,
                    5 => EditKey::Delete,
                    _ => EditKey::SelectAll,
                };
                let action = match (arg >> 3) % 3 {
                    0 => KeyAction::Press,
                    1 => KeyAction::Repeat,
                    _ => KeyAction::Release,
                };
                ctl.handle_key(key, action, arg & 0x80 != 0);
            }
            2..=4 => {
                let field = (arg & 1) as usize;
                let sample = PointerSample {
                    x: (arg >> 1) as f32,
                    y: if op & 0x10 != 0 { 20.0 } else { 60.0 },
                    down: op & 0x20 != 0,
                    pressed: op & 0x40 != 0,
                    shift: op & 0x80 != 0,
                };
                ctl.process_pointer(FIELDS[field], rect_for(field), &sample);
            }
            _ => {
                let text: String = data.iter().take(arg as usize % 40).map(|&b| b as char).collect();
                ctl.set_text(FIELDS[(arg & 1) as usize], &text);
            }
        }

        let mut active = 0;
        for (i, id) in FIELDS.into_iter().enumerate() {
            let Some(field) = ctl.field(id) else {
                continue;
            };
            let buf = field.buffer();
            assert!(buf.len() <= CAPACITY - 1);
            assert!(buf.caret() <= buf.len());
            assert!(buf.selection_anchor() <= buf.len());
            assert!(buf.text().chars().all(is_printable));

            let layout = field.layout();
            assert_eq!(layout.len(), buf.len());
            let scroll = layout.scroll_offset();
            let viewport = rect_for(i).viewport_width(ctl.config().padding_x);
            assert!(scroll >= 0.0 && scroll <= layout.max_scroll(viewport) + 1e-3);

            if field.is_active() {
                active += 1;
                assert_eq!(ctl.focused(), Some(id));
            }
        }
        assert!(active <= 1);
    }
});
