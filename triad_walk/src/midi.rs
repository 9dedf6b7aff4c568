// MIDI rendering of realized chords.
//
// Two tracks, built chord by chord as the driver hands chords over. The lead
// track sounds the three voicing slots at fixed octaves 4, 5 and 6; the bass
// track doubles the first voicing slot at octave 3. Every chord's note-ons
// open together and its note-offs close together two quarter notes later, so
// consecutive chords never overlap.
//
// Uses the `midly` crate for SMF assembly (Format 1, metrical timing).

use crate::chord::ChordState;
use crate::pitch::PitchClass;
use crate::progression::{ChordRenderer, RenderError};
use midly::{
    Format, Header, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u28},
};
use std::path::Path;

/// Ticks per quarter note in the output file.
const TICKS_PER_QUARTER: u16 = 2048;

/// Each chord sounds for two quarter notes.
const CHORD_TICKS: u32 = TICKS_PER_QUARTER as u32 * 2;

/// Note-on velocity for every voice.
const VELOCITY: u8 = 96;

/// Fixed octave per voicing slot on the lead track.
const LEAD_OCTAVES: [u8; 3] = [4, 5, 6];

/// Octave of the doubled bass voice.
const BASS_OCTAVE: u8 = 3;

/// Renderer that accumulates chords into a two-track SMF.
pub struct MidiRenderer {
    lead: Track<'static>,
    bass: Track<'static>,
}

impl MidiRenderer {
    pub fn new() -> Self {
        MidiRenderer {
            lead: Track::new(),
            bass: Track::new(),
        }
    }

    /// MIDI key for a pitch class at a fixed octave.
    fn key(octave: u8, pc: PitchClass) -> Result<u7, RenderError> {
        let key = octave as u16 * 12 + pc.value() as u16;
        if key > 127 {
            return Err(RenderError::KeyOutOfRange { key });
        }
        Ok(u7::new(key as u8))
    }

    fn push_note(track: &mut Track<'static>, delta: u32, message: MidiMessage) {
        track.push(TrackEvent {
            delta: u28::new(delta),
            kind: TrackEventKind::Midi {
                channel: u4::new(0),
                message,
            },
        });
    }

    fn note_on(track: &mut Track<'static>, delta: u32, key: u7) {
        Self::push_note(
            track,
            delta,
            MidiMessage::NoteOn {
                key,
                vel: u7::new(VELOCITY),
            },
        );
    }

    fn note_off(track: &mut Track<'static>, delta: u32, key: u7) {
        Self::push_note(
            track,
            delta,
            MidiMessage::NoteOff {
                key,
                vel: u7::new(VELOCITY),
            },
        );
    }

    /// Close both tracks and assemble the file: lead first, then bass.
    pub fn into_smf(mut self) -> Smf<'static> {
        let end = || TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
        };
        self.lead.push(end());
        self.bass.push(end());

        let mut smf = Smf::new(Header::new(
            Format::Parallel,
            Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
        ));
        smf.tracks.push(self.lead);
        smf.tracks.push(self.bass);
        smf
    }

    /// Assemble and write the finished file.
    pub fn write(self, path: &Path) -> Result<(), RenderError> {
        self.into_smf().save(path)?;
        Ok(())
    }
}

impl Default for MidiRenderer {
    fn default() -> Self {
        MidiRenderer::new()
    }
}

impl ChordRenderer for MidiRenderer {
    fn chord(&mut self, state: &ChordState) -> Result<(), RenderError> {
        // Resolve every key up front; a rejected chord emits no events at
        // all, leaving no half-open notes behind.
        let bass_key = Self::key(BASS_OCTAVE, state.voicing[0])?;
        let lead_keys = [
            Self::key(LEAD_OCTAVES[0], state.voicing[0])?,
            Self::key(LEAD_OCTAVES[1], state.voicing[1])?,
            Self::key(LEAD_OCTAVES[2], state.voicing[2])?,
        ];

        Self::note_on(&mut self.bass, 0, bass_key);
        for key in lead_keys {
            Self::note_on(&mut self.lead, 0, key);
        }

        Self::note_off(&mut self.bass, CHORD_TICKS, bass_key);
        // The first off carries the chord length; the rest close at the same
        // tick.
        for (i, key) in lead_keys.into_iter().enumerate() {
            Self::note_off(&mut self.lead, if i == 0 { CHORD_TICKS } else { 0 }, key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(octave: u8, pc: PitchClass) -> u8 {
        MidiRenderer::key(octave, pc).unwrap().as_int()
    }

    #[test]
    fn key_mapping_matches_octave_times_twelve() {
        assert_eq!(key_of(4, PitchClass::C), 48);
        assert_eq!(key_of(5, PitchClass::E), 64);
        assert_eq!(key_of(6, PitchClass::G), 79);
        assert_eq!(key_of(3, PitchClass::C), 36);
    }

    #[test]
    fn key_out_of_range_is_rejected() {
        let err = MidiRenderer::key(11, PitchClass::B).unwrap_err();
        assert!(matches!(err, RenderError::KeyOutOfRange { key: 143 }));
    }

    #[test]
    fn one_chord_emits_paired_events() {
        let mut renderer = MidiRenderer::new();
        renderer.chord(&ChordState::c_major()).unwrap();

        // Lead: three ons at delta 0, then offs at CHORD_TICKS, 0, 0.
        assert_eq!(renderer.lead.len(), 6);
        for event in &renderer.lead[..3] {
            assert_eq!(event.delta.as_int(), 0);
            assert!(matches!(
                event.kind,
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOn { .. },
                    ..
                }
            ));
        }
        assert_eq!(renderer.lead[3].delta.as_int(), CHORD_TICKS);
        for event in &renderer.lead[3..] {
            assert!(matches!(
                event.kind,
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOff { .. },
                    ..
                }
            ));
        }

        // Bass: one on, one off, doubling the first voicing slot.
        assert_eq!(renderer.bass.len(), 2);
        assert_eq!(renderer.bass[1].delta.as_int(), CHORD_TICKS);
    }

    #[test]
    fn smf_has_two_closed_tracks() {
        let mut renderer = MidiRenderer::new();
        renderer.chord(&ChordState::c_major()).unwrap();
        let smf = renderer.into_smf();

        assert_eq!(smf.tracks.len(), 2);
        assert_eq!(smf.header.format, Format::Parallel);
        for track in &smf.tracks {
            assert!(matches!(
                track.last().unwrap().kind,
                TrackEventKind::Meta(midly::MetaMessage::EndOfTrack)
            ));
        }
    }
}
