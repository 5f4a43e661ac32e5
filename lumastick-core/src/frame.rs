//! Per-frame pipeline
//!
//! One loop iteration: sample the stick, map it, drive the LEDs (while PWM
//! is enabled) and render. `run_frame` chains the steps; the pieces are
//! public for callers that need only part of the pipeline.

use crate::config::CalibrationConstants;
use crate::mapping::{map_intensity, map_position, CursorPosition, Intensity, RawSample};
use crate::render::{render_frame, FramePlan};
use crate::state::{SessionSnapshot, SessionState};
use crate::traits::{
    DisplayError, FrameDisplay, LedChannel, LedDriver, LedError, SampleSource, SensorError,
};

/// Failure of one frame, surfaced to the polling loop
///
/// The session is never modified by a failed frame, so the loop can simply
/// skip to the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    SensorUnavailable,
    DisplayBusError,
    InvalidChannel,
}

impl From<SensorError> for FrameError {
    fn from(e: SensorError) -> Self {
        match e {
            SensorError::SensorUnavailable => FrameError::SensorUnavailable,
        }
    }
}

impl From<DisplayError> for FrameError {
    fn from(e: DisplayError) -> Self {
        match e {
            DisplayError::DisplayBusError | DisplayError::NotInitialized => {
                FrameError::DisplayBusError
            }
        }
    }
}

impl From<LedError> for FrameError {
    fn from(e: LedError) -> Self {
        match e {
            LedError::InvalidChannel => FrameError::InvalidChannel,
        }
    }
}

/// Everything computed for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub raw: RawSample,
    pub cursor: CursorPosition,
    pub intensity: Intensity,
    pub session: SessionSnapshot,
}

/// Map a raw sample against a session snapshot
pub fn map_frame(
    raw: RawSample,
    constants: &CalibrationConstants,
    session: SessionSnapshot,
) -> Frame {
    Frame {
        raw,
        cursor: map_position(raw, constants),
        intensity: map_intensity(raw, constants),
        session,
    }
}

/// Write the frame's duty cycles, if PWM output is enabled
///
/// Green is fully on or off. Nothing is written while PWM is disabled.
pub fn apply_leds<L: LedDriver>(
    leds: &mut L,
    frame: &Frame,
    constants: &CalibrationConstants,
) -> Result<(), LedError> {
    if !frame.session.pwm_enabled {
        return Ok(());
    }

    let green = if frame.session.led_green_on {
        constants.max_duty
    } else {
        0
    };

    leds.set_duty_cycle(LedChannel::Red, frame.intensity.red)?;
    leds.set_duty_cycle(LedChannel::Blue, frame.intensity.blue)?;
    leds.set_duty_cycle(LedChannel::Green, green)
}

/// Draw the frame's border and sprite
pub fn draw_frame<D: FrameDisplay>(
    display: &mut D,
    frame: &Frame,
    constants: &CalibrationConstants,
) -> Result<(), DisplayError> {
    let plan = FramePlan::build(constants, frame.session.border_style, frame.cursor);
    render_frame(display, &plan)
}

/// Run one complete loop iteration
pub fn run_frame<S, D, L>(
    sensor: &mut S,
    display: &mut D,
    leds: &mut L,
    session: &SessionState,
    constants: &CalibrationConstants,
) -> Result<Frame, FrameError>
where
    S: SampleSource,
    D: FrameDisplay,
    L: LedDriver,
{
    let raw = sensor.read()?;
    let frame = map_frame(raw, constants, session.snapshot());

    apply_leds(leds, &frame, constants)?;
    draw_frame(display, &frame, constants)?;

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BorderStyle;

    const C: CalibrationConstants = CalibrationConstants::DEFAULT;

    struct FixedSample(Result<RawSample, SensorError>);

    impl SampleSource for FixedSample {
        fn read(&mut self) -> Result<RawSample, SensorError> {
            self.0
        }
    }

    #[derive(Default)]
    struct DutyLog {
        duties: Vec<(LedChannel, u16)>,
    }

    impl LedDriver for DutyLog {
        fn set_duty_cycle(&mut self, channel: LedChannel, duty: u16) -> Result<(), LedError> {
            self.duties.push((channel, duty));
            Ok(())
        }

        fn set_enabled(&mut self, _channel: LedChannel, _enabled: bool) -> Result<(), LedError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RectLog {
        rects: Vec<(i32, i32, u32, u32, bool)>,
        flushed: bool,
    }

    impl FrameDisplay for RectLog {
        fn clear(&mut self) {
            self.rects.clear();
        }

        fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, filled: bool) {
            self.rects.push((x, y, width, height, filled));
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn test_centered_frame() {
        let session = SessionState::new();
        let mut sensor = FixedSample(Ok(RawSample::new(C.center_x, C.center_y)));
        let mut display = RectLog::default();
        let mut leds = DutyLog::default();

        let frame = run_frame(&mut sensor, &mut display, &mut leds, &session, &C).unwrap();

        assert_eq!(frame.cursor, CursorPosition::new(60, 28));
        assert_eq!(frame.intensity, Intensity { red: 0, blue: 0 });
        assert_eq!(
            leds.duties,
            [
                (LedChannel::Red, 0),
                (LedChannel::Blue, 0),
                (LedChannel::Green, 0)
            ]
        );
        assert_eq!(
            display.rects,
            [(0, 0, 128, 64, false), (60, 28, 8, 8, true)]
        );
        assert!(display.flushed);
    }

    #[test]
    fn test_green_full_when_on() {
        let session = SessionState::new();
        session.on_primary_button();
        let mut sensor = FixedSample(Ok(RawSample::new(C.center_x + 300, C.center_y)));
        let mut display = RectLog::default();
        let mut leds = DutyLog::default();

        let frame = run_frame(&mut sensor, &mut display, &mut leds, &session, &C).unwrap();

        assert_eq!(frame.session.border_style, BorderStyle::Inset);
        assert_eq!(
            leds.duties,
            [
                (LedChannel::Red, 3200),
                (LedChannel::Blue, 0),
                (LedChannel::Green, 4095)
            ]
        );
        assert_eq!(display.rects[0], (2, 2, 124, 60, false));
    }

    #[test]
    fn test_no_duty_writes_while_disabled() {
        let frame = map_frame(
            RawSample::new(0, 0),
            &C,
            SessionSnapshot {
                led_green_on: true,
                border_style: BorderStyle::Outer,
                pwm_enabled: false,
            },
        );
        let mut leds = DutyLog::default();

        assert_eq!(apply_leds(&mut leds, &frame, &C), Ok(()));
        assert!(leds.duties.is_empty());
    }

    #[test]
    fn test_run_frame_draws_while_pwm_disabled() {
        let session = SessionState::new();
        session.on_secondary_button(&mut DutyLog::default()).unwrap();
        let mut sensor = FixedSample(Ok(RawSample::new(0, C.center_y)));
        let mut display = RectLog::default();
        let mut leds = DutyLog::default();

        let frame = run_frame(&mut sensor, &mut display, &mut leds, &session, &C).unwrap();

        assert!(!frame.session.pwm_enabled);
        assert!(leds.duties.is_empty());
        assert_eq!(
            display.rects,
            [(0, 0, 128, 64, false), (110, 28, 8, 8, true)]
        );
        assert!(display.flushed);
    }

    #[test]
    fn test_sensor_failure_skips_frame() {
        let session = SessionState::new();
        let mut sensor = FixedSample(Err(SensorError::SensorUnavailable));
        let mut display = RectLog::default();
        let mut leds = DutyLog::default();

        let result = run_frame(&mut sensor, &mut display, &mut leds, &session, &C);

        assert_eq!(result, Err(FrameError::SensorUnavailable));
        assert!(leds.duties.is_empty());
        assert!(!display.flushed);
        assert_eq!(session.snapshot(), SessionSnapshot::default());
    }

    #[test]
    fn test_error_conversions() {
        assert_eq!(
            FrameError::from(DisplayError::NotInitialized),
            FrameError::DisplayBusError
        );
        assert_eq!(
            FrameError::from(LedError::InvalidChannel),
            FrameError::InvalidChannel
        );
    }
}
