//! Primitive UI Components
//!
//! Leaf components. Each owns at most focus, typing or press state.

pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod input_numbers;
pub mod label;
pub mod progress_bar;
pub mod radio_button;
pub mod rating;
pub mod slider;
pub mod stepper;
pub mod tag;
pub mod toggle;

pub use avatar::{Avatar, AvatarGroup};
pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use input::{Input, InputEvent, InputState};
pub use input_numbers::{InputNumbers, InputNumbersEvent, NumberRange};
pub use label::{Label, LabelState};
pub use progress_bar::ProgressBar;
pub use radio_button::{RadioButton, RadioGroup, RadioOption};
pub use rating::Rating;
pub use slider::Slider;
pub use stepper::{StepStatus, Stepper, StepperGroup, StepperLine};
pub use tag::Tag;
pub use toggle::Toggle;
