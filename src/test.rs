use crate::{
    control, io::CursorError, num::u7, status, Arity, Category, ChannelMode, Error, Message,
    MessageKind, MonoChannels, RunningStatusEncoder, StreamState,
};

/// Check that each message encodes to exactly the given bytes.
fn test_encode(list: &[(&[u8], Message)]) {
    for (raw, msg) in list {
        assert_eq!(&msg.to_bytes()[..], *raw, "encoding {:?}", msg);
        assert_eq!(msg.encoded_len(false), raw.len());
        assert_eq!(msg.status_byte(), raw[0]);
    }
}

fn out_of_range(field: &'static str, value: i32, min: i32, max: i32) -> Error {
    Error::out_of_range(field, value, min, max)
}

mod catalog {
    use super::*;

    #[test]
    fn channel_voice() {
        test_encode(&[
            (&[0x80, 0, 63], Message::note_off(1, 0, 63).unwrap()),
            (&[0x87, 121, 127], Message::note_off(8, 121, 127).unwrap()),
            (&[0x8F, 60, 0x40], Message::note_off_default_velocity(16, 60).unwrap()),
            (&[0x90, 0, 63], Message::note_on(1, 0, 63).unwrap()),
            (&[0x9A, 127, 0], Message::note_on(11, 127, 0).unwrap()),
            (&[0x93, 64, 0x40], Message::note_on_default_velocity(4, 64).unwrap()),
            (&[0x95, 72, 0], Message::note_off_as_note_on(6, 72).unwrap()),
            (&[0xA0, 60, 90], Message::poly_key_pressure(1, 60, 90).unwrap()),
            (&[0xB7, 7, 100], Message::control_change(8, 7, 100).unwrap()),
            (&[0xB0, 123, 0], Message::control_change(1, 123, 0).unwrap()),
            (&[0xC2, 42], Message::program_change(3, 42).unwrap()),
            (&[0xDF, 127], Message::channel_pressure(16, 127).unwrap()),
            (&[0xE0, 0x00, 0x40], Message::pitch_bend_change(1, 8192).unwrap()),
            (&[0xE1, 0x7F, 0x7F], Message::pitch_bend_change(2, 16383).unwrap()),
            (&[0xE1, 0x01, 0x02], Message::pitch_bend_change_split(2, 1, 2).unwrap()),
        ]);
    }

    #[test]
    fn channel_mode() {
        test_encode(&[
            (&[0xB0, 120, 0], Message::all_sound_off(1).unwrap()),
            (&[0xB1, 121, 0], Message::reset_all_controllers(2).unwrap()),
            (&[0xB2, 122, 127], Message::local_control(3, true).unwrap()),
            (&[0xB2, 122, 0], Message::local_control(3, false).unwrap()),
            (&[0xB3, 123, 0], Message::all_notes_off(4).unwrap()),
            (&[0xB4, 124, 0], Message::omni_off(5).unwrap()),
            (&[0xB5, 125, 0], Message::omni_on(6).unwrap()),
            (&[0xB6, 126, 4], Message::mono_on(7, 4).unwrap()),
            (&[0xB7, 127, 0], Message::poly_on(8).unwrap()),
        ]);
        assert_eq!(
            Message::mono_on(1, 17),
            Err(out_of_range("mono channels", 17, 0, 16))
        );
        assert_eq!(
            Message::mono_on(1, -1),
            Err(out_of_range("mono channels", -1, 0, 16))
        );
        assert_eq!(MonoChannels::new(17), None);
        let all = MonoChannels::new(16).unwrap();
        assert_eq!(all, MonoChannels::MAX);
        assert_eq!(
            Message::channel_mode(2, ChannelMode::MonoOn(all))
                .unwrap()
                .to_bytes(),
            [0xB1, 126, 16]
        );
        assert_eq!(
            ChannelMode::from_control(control::MONO_ON, u7::from_int_lossy(16)),
            Some(ChannelMode::MonoOn(MonoChannels::MAX))
        );
        assert_eq!(
            ChannelMode::from_control(control::MONO_ON, u7::from_int_lossy(100)),
            None
        );
        let mode = ChannelMode::LocalControl(true);
        assert_eq!(
            ChannelMode::from_control(mode.controller(), mode.value()),
            Some(mode)
        );
        assert_eq!(
            ChannelMode::from_control(control::CHANNEL_VOLUME, u7::from_int_lossy(0)),
            None
        );
    }

    #[test]
    fn system() {
        test_encode(&[
            (&[0xF1, 0x35], Message::mtc_quarter_frame(3, 5).unwrap()),
            (&[0xF1, 0x7F], Message::mtc_quarter_frame(7, 15).unwrap()),
            (&[0xF2, 0x34, 0x24], Message::song_position(0x1234).unwrap()),
            (&[0xF2, 0x10, 0x20], Message::song_position_split(0x10, 0x20).unwrap()),
            (&[0xF3, 9], Message::song_select(9).unwrap()),
            (&[0xF6], Message::tune_request()),
            (&[0xF8], Message::timing_clock()),
            (&[0xFA], Message::start()),
            (&[0xFB], Message::continue_playback()),
            (&[0xFC], Message::stop()),
            (&[0xFE], Message::active_sensing()),
            (&[0xFF], Message::system_reset()),
        ]);
    }

    #[test]
    fn sysex() {
        let msg = Message::sysex(&[1, 2, 3]).unwrap();
        assert_eq!(msg.to_bytes(), [status::SOX, 1, 2, 3, status::EOX]);
        assert_eq!(msg.status_byte(), 0xF0);
        assert!(msg.is_sysex());
        assert_eq!(msg.data_arity(), Arity::Variable);
        assert_eq!(msg.channel(), None);
        assert_eq!(
            Message::sysex(&[0x43, 0x80, 0x01]),
            Err(out_of_range("sysex data", 0x80, 0, 127))
        );
    }

    #[test]
    fn kinds() {
        let on = Message::note_on(5, 60, 100).unwrap();
        assert_eq!(on.kind(), MessageKind::NoteOn);
        assert_eq!(on.category(), Category::ChannelVoice);
        assert_eq!(on.data_arity(), Arity::Fixed(2));
        assert_eq!(on.channel().map(|ch| ch.number()), Some(5));
        assert!(!on.is_sysex());

        let mode = Message::all_notes_off(1).unwrap();
        assert_eq!(mode.kind(), MessageKind::ChannelMode);
        assert_eq!(mode.category(), Category::ChannelMode);
        assert_eq!(mode.status_byte(), 0xB0);

        assert_eq!(
            Message::program_change(1, 0).unwrap().data_arity(),
            Arity::Fixed(1)
        );
        assert_eq!(Message::song_select(0).unwrap().category(), Category::SystemCommon);
        assert_eq!(Message::tune_request().data_arity(), Arity::Fixed(0));
        assert_eq!(Message::stop().category(), Category::SystemRealtime);
        assert_eq!(MessageKind::SysEx.category(), Category::SystemExclusive);
        assert!(MessageKind::SysEx.is_sysex());
        assert_eq!(MessageKind::PitchBendChange.status_template(), 0xE0);
        assert_eq!(MessageKind::MtcQuarterFrame.arity().fixed_len(), Some(1));
        assert!(Category::ChannelMode.allows_running_status());
        assert!(!Category::SystemRealtime.allows_running_status());
    }
}

mod validation {
    use super::*;

    #[test]
    fn channel_status_bytes() {
        for channel in 1..=16 {
            let msg = Message::note_on(channel, 60, 100).unwrap();
            assert_eq!(msg.status_byte(), 0x90 | (channel as u8 - 1));
        }
        for &channel in &[-1, 0, 17, 255] {
            assert_eq!(
                Message::note_on(channel, 60, 100),
                Err(out_of_range("channel", channel, 1, 16))
            );
        }
    }

    #[test]
    fn data_bytes_round_trip() {
        for n in 0..=127 {
            let b = n as u8;
            assert_eq!(Message::note_off(1, n, n).unwrap().to_bytes()[1..], [b, b]);
            assert_eq!(Message::note_on(1, n, n).unwrap().to_bytes()[1..], [b, b]);
            assert_eq!(
                Message::poly_key_pressure(1, n, n).unwrap().to_bytes()[1..],
                [b, b]
            );
            assert_eq!(
                Message::control_change(1, n, n).unwrap().to_bytes()[1..],
                [b, b]
            );
            assert_eq!(Message::program_change(1, n).unwrap().to_bytes()[1..], [b]);
            assert_eq!(Message::channel_pressure(1, n).unwrap().to_bytes()[1..], [b]);
            assert_eq!(
                Message::pitch_bend_change_split(1, n, n).unwrap().to_bytes()[1..],
                [b, b]
            );
        }
        for &n in &[-1, 128, 1000] {
            assert_eq!(
                Message::note_off(1, n, 0),
                Err(out_of_range("note", n, 0, 127))
            );
            assert_eq!(
                Message::note_on(1, 0, n),
                Err(out_of_range("velocity", n, 0, 127))
            );
            assert_eq!(
                Message::poly_key_pressure(1, 0, n),
                Err(out_of_range("pressure", n, 0, 127))
            );
            assert_eq!(
                Message::control_change(1, n, 0),
                Err(out_of_range("controller", n, 0, 127))
            );
            assert_eq!(
                Message::control_change(1, 0, n),
                Err(out_of_range("value", n, 0, 127))
            );
            assert_eq!(
                Message::program_change(1, n),
                Err(out_of_range("program", n, 0, 127))
            );
            assert_eq!(
                Message::channel_pressure(1, n),
                Err(out_of_range("pressure", n, 0, 127))
            );
            assert_eq!(
                Message::song_select(n),
                Err(out_of_range("song", n, 0, 127))
            );
        }
    }

    #[test]
    fn channel_is_checked_first() {
        assert_eq!(
            Message::note_on(0, 200, 200),
            Err(out_of_range("channel", 0, 1, 16))
        );
        assert_eq!(
            Message::note_on(1, 200, 200),
            Err(out_of_range("note", 200, 0, 127))
        );
    }

    #[test]
    fn fourteen_bit_fields() {
        assert_eq!(
            Message::pitch_bend_change(1, 16384),
            Err(out_of_range("pitch bend", 16384, 0, 16383))
        );
        assert_eq!(
            Message::pitch_bend_change(1, -1),
            Err(out_of_range("pitch bend", -1, 0, 16383))
        );
        assert_eq!(
            Message::song_position(20000),
            Err(out_of_range("song position", 20000, 0, 16383))
        );
        assert_eq!(
            Message::song_position_split(0, 128),
            Err(out_of_range("song position msb", 128, 0, 127))
        );
        assert_eq!(
            Message::pitch_bend_change(1, 0).unwrap().to_bytes(),
            [0xE0, 0, 0]
        );
    }

    #[test]
    fn mtc_fields() {
        assert_eq!(
            Message::mtc_quarter_frame(8, 0),
            Err(out_of_range("mtc message type", 8, 0, 7))
        );
        assert_eq!(
            Message::mtc_quarter_frame(0, 16),
            Err(out_of_range("mtc value", 16, 0, 15))
        );
    }

    #[test]
    fn raw_channel_mode_controllers() {
        assert_eq!(
            Message::control_change(1, 126, 100),
            Err(out_of_range("mono channels", 100, 0, 16))
        );
        let raw = Message::control_change(1, 126, 16).unwrap();
        assert_eq!(raw.kind(), MessageKind::ControlChange);
        assert_eq!(raw.to_bytes(), Message::mono_on(1, 16).unwrap().to_bytes());
        assert_eq!(
            Message::control_change(1, 127, 0).unwrap().to_bytes(),
            [0xB0, 127, 0]
        );
    }

    #[test]
    fn switches() {
        assert_eq!(
            Message::control_switch(1, 64, true).unwrap().to_bytes(),
            [0xB0, 64, 127]
        );
        assert_eq!(
            Message::control_switch(1, 66, false).unwrap().to_bytes(),
            [0xB0, 66, 0]
        );
        assert_eq!(
            Message::control_switch(1, 7, true),
            Err(out_of_range("controller", 7, 64, 69))
        );
        assert!(control::control_to_boolean(u7::from_int_lossy(64)));
        assert!(!control::control_to_boolean(u7::from_int_lossy(63)));
        assert!(control::is_switch_control(control::SOSTENUTO));
    }

    #[test]
    fn fourteen_bit_controllers() {
        let [msb, lsb] = Message::control_change_14bit(2, 1, 0x1234).unwrap();
        assert_eq!(msb.to_bytes(), [0xB1, 0x01, 0x24]);
        assert_eq!(lsb.to_bytes(), [0xB1, 0x21, 0x34]);
        assert_eq!(
            Message::control_change_14bit(1, 32, 0),
            Err(out_of_range("controller", 32, 0, 31))
        );
        assert_eq!(
            Message::control_change_14bit(1, 0, 16384),
            Err(out_of_range("value", 16384, 0, 16383))
        );
    }

    #[test]
    fn error_display() {
        let err = Message::note_on(1, 128, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "note out of range: 128 is not within [0, 127]"
        );
    }
}

mod running_status {
    use super::*;

    fn note_on(note: i32) -> Message<'static> {
        Message::note_on(1, note, 100).unwrap()
    }

    #[test]
    fn elides_repeated_status() {
        let mut enc = RunningStatusEncoder::new();
        let bytes = enc.encode_all(&[note_on(60), note_on(62)]);
        assert_eq!(bytes, [0x90, 60, 100, 62, 100]);
    }

    #[test]
    fn second_message_alone() {
        let mut enc = RunningStatusEncoder::new();
        let mut out = Vec::new();
        enc.write(&note_on(60), &mut out).unwrap();
        out.clear();
        enc.write(&note_on(62), &mut out).unwrap();
        assert_eq!(out, [62, 100]);
    }

    #[test]
    fn system_common_resets() {
        let mut enc = RunningStatusEncoder::new();
        let bytes = enc.encode_all(&[note_on(60), Message::tune_request(), note_on(62)]);
        assert_eq!(bytes, [0x90, 60, 100, 0xF6, 0x90, 62, 100]);
    }

    #[test]
    fn realtime_interleaves() {
        let mut enc = RunningStatusEncoder::new();
        let bytes = enc.encode_all(&[note_on(60), Message::timing_clock(), note_on(62)]);
        assert_eq!(bytes, [0x90, 60, 100, 0xF8, 62, 100]);
    }

    #[test]
    fn sysex_never_elided() {
        let sysex = Message::sysex(&[1, 2, 3]).unwrap();
        let mut enc = RunningStatusEncoder::new();
        let bytes = enc.encode_all(&[note_on(60), sysex, sysex, note_on(62)]);
        assert_eq!(
            bytes,
            [0x90, 60, 100, 0xF0, 1, 2, 3, 0xF7, 0xF0, 1, 2, 3, 0xF7, 0x90, 62, 100]
        );
    }

    #[test]
    fn status_changes() {
        let mut enc = RunningStatusEncoder::new();
        let bytes = enc.encode_all(&[
            note_on(60),
            Message::note_on(2, 60, 100).unwrap(),
            Message::note_off_as_note_on(2, 60).unwrap(),
            Message::control_change(2, 7, 90).unwrap(),
            Message::all_notes_off(2).unwrap(),
        ]);
        assert_eq!(
            bytes,
            [0x90, 60, 100, 0x91, 60, 100, 60, 0, 0xB1, 7, 90, 123, 0]
        );
        assert_eq!(enc.state(), StreamState::LastStatus(0xB1));
    }

    #[test]
    fn independent_streams() {
        let mut a = RunningStatusEncoder::new();
        let mut b = RunningStatusEncoder::new();
        a.process(&note_on(60));
        assert!(a.process(&note_on(61)).elide_status);
        assert!(!b.process(&note_on(61)).elide_status);
    }

    #[test]
    fn toggled_mid_stream() {
        let mut enc = RunningStatusEncoder::new();
        enc.set_running_status(false);
        assert!(!enc.running_status());
        let bytes = enc.encode_all(&[note_on(60), note_on(62)]);
        assert_eq!(bytes, [0x90, 60, 100, 0x90, 62, 100]);
        enc.set_running_status(true);
        assert_eq!(enc.encode_all(&[note_on(64)]), [64, 100]);
    }

    #[test]
    fn fixed_buffer_stream() {
        let mut buf = [0u8; 8];
        let mut enc = RunningStatusEncoder::new();
        let written = {
            let mut out = &mut buf[..];
            enc.write(&note_on(60), &mut out).unwrap();
            enc.write(&note_on(62), &mut out).unwrap();
            enc.write(&Message::stop(), &mut out).unwrap();
            8 - out.len()
        };
        assert_eq!(&buf[..written], &[0x90, 60, 100, 62, 100, 0xFC]);
    }

    #[test]
    fn failed_write_drops_status() {
        let mut enc = RunningStatusEncoder::new();
        let mut empty: &mut [u8] = &mut [];
        assert_eq!(
            enc.write(&note_on(60), &mut empty),
            Err(CursorError::OutOfSpace)
        );
        assert_eq!(enc.state(), StreamState::NoStatus);
        let mut out = Vec::new();
        enc.write(&note_on(60), &mut out).unwrap();
        assert_eq!(out, [0x90, 60, 100]);

        //Running status was active, but the next message only got halfway through
        let mut short = [0u8; 1];
        assert_eq!(
            enc.write(&note_on(62), &mut &mut short[..]),
            Err(CursorError::OutOfSpace)
        );
        assert_eq!(enc.state(), StreamState::NoStatus);
        out.clear();
        enc.write(&note_on(62), &mut out).unwrap();
        assert_eq!(out, [0x90, 62, 100]);
    }

    #[test]
    fn std_writer() {
        let mut out = Vec::new();
        note_on(60).write_std(&mut out).unwrap();
        assert_eq!(out, [0x90, 60, 100]);
    }
}
