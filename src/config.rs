//! Register map of the IS31FL3731.
//!
//! Names and values follow the datasheet:
//! https://www.lumissil.com/assets/pdf/core/IS31FL3731_DS.pdf

/// Device address with the AD pin tied to GND
pub const DEFAULT_ADDRESS: u8 = 0x74;
/// Device address with the AD pin tied to SCL
pub const ADDRESS_AD_SCL: u8 = 0x75;
/// Device address with the AD pin tied to SDA
pub const ADDRESS_AD_SDA: u8 = 0x76;
/// Device address with the AD pin tied to VCC
pub const ADDRESS_AD_VCC: u8 = 0x77;

/// Command register, selects the bank subsequent writes go to
pub const COMMAND: u8 = 0xfd;

pub const FRAME_0: u8 = 0x00;
pub const FRAME_1: u8 = 0x01;
pub const FRAME_2: u8 = 0x02;
pub const FRAME_3: u8 = 0x03;
pub const FRAME_4: u8 = 0x04;
pub const FRAME_5: u8 = 0x05;
pub const FRAME_6: u8 = 0x06;
pub const FRAME_7: u8 = 0x07;

/// Function (configuration) bank
pub const FUNCTION: u8 = 0x0b;

// Function bank registers
pub const SET_DISPLAY_MODE: u8 = 0x00;
pub const SET_ACTIVE_FRAME: u8 = 0x01;
pub const SET_AUDIOSYNC: u8 = 0x06;
pub const SET_SHUTDOWN: u8 = 0x0a;

pub const DISPLAY_MODE_PICTURE: u8 = 0x00;

// Audio signal modulates the intensity of the matrix
pub const AUDIOSYNC_OFF: u8 = 0x00;
pub const AUDIOSYNC_ON: u8 = 0x01;

// Software shutdown register: OFF is shutdown mode, ON is normal operation
pub const SOFTWARE_OFF: u8 = 0x00;
pub const SOFTWARE_ON: u8 = 0x01;

/// On/off bit per LED, inside a frame bank
pub const LED_CONTROL_OFFSET: u8 = 0x00;
/// PWM duty (0-255) per LED, inside a frame bank
pub const LED_PWM_OFFSET: u8 = 0x24;

/// One of the eight frame banks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Frame {
    Frame0 = FRAME_0,
    Frame1 = FRAME_1,
    Frame2 = FRAME_2,
    Frame3 = FRAME_3,
    Frame4 = FRAME_4,
    Frame5 = FRAME_5,
    Frame6 = FRAME_6,
    Frame7 = FRAME_7,
}

impl Frame {
    pub const ALL: [Frame; 8] = [
        Frame::Frame0,
        Frame::Frame1,
        Frame::Frame2,
        Frame::Frame3,
        Frame::Frame4,
        Frame::Frame5,
        Frame::Frame6,
        Frame::Frame7,
    ];
}

/// Target of a write to the command register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Frame(Frame),
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FunctionRegister {
    DisplayMode = SET_DISPLAY_MODE,
    ActiveFrame = SET_ACTIVE_FRAME,
    AudioSync = SET_AUDIOSYNC,
    Shutdown = SET_SHUTDOWN,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    Picture = DISPLAY_MODE_PICTURE,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AudioSync {
    Off = AUDIOSYNC_OFF,
    On = AUDIOSYNC_ON,
}

/// Value of the shutdown register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Software {
    /// Software shutdown, LEDs are not driven
    Off = SOFTWARE_OFF,
    /// Normal operation
    On = SOFTWARE_ON,
}

/// Register block inside a frame bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameBlock {
    LedControl = LED_CONTROL_OFFSET,
    LedPwm = LED_PWM_OFFSET,
}

impl From<Frame> for u8 {
    fn from(frame: Frame) -> u8 {
        frame as u8
    }
}

impl From<Bank> for u8 {
    fn from(bank: Bank) -> u8 {
        match bank {
            Bank::Frame(frame) => frame.into(),
            Bank::Function => FUNCTION,
        }
    }
}

impl From<FunctionRegister> for u8 {
    fn from(register: FunctionRegister) -> u8 {
        register as u8
    }
}

impl From<DisplayMode> for u8 {
    fn from(mode: DisplayMode) -> u8 {
        mode as u8
    }
}

impl From<AudioSync> for u8 {
    fn from(audiosync: AudioSync) -> u8 {
        audiosync as u8
    }
}

impl From<Software> for u8 {
    fn from(software: Software) -> u8 {
        software as u8
    }
}

impl From<FrameBlock> for u8 {
    fn from(block: FrameBlock) -> u8 {
        block as u8
    }
}
