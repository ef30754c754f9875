/// wrap the low level data type that carries information, the red channel of a pixel
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct ColorChannel(pub u8);

impl From<u8> for ColorChannel {
    fn from(value: u8) -> Self {
        ColorChannel(value)
    }
}

/// mutable red channel for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub struct ColorChannelMut<'a>(pub &'a mut u8);

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for ColorChannelMut<'_> {
    #[inline]
    fn hide_bit(self, bit: bool) {
        *self.0 = (*self.0 & 0xFE) | u8::from(bit);
    }
}

pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl UnveilBit for ColorChannel {
    #[inline]
    fn unveil_bit(&self) -> bool {
        self.0 & 0x01 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_bit_should_only_touch_the_least_significant_bit() {
        let mut red: u8 = 0b1010_1010;
        ColorChannelMut(&mut red).hide_bit(true);
        assert_eq!(red, 0b1010_1011);

        ColorChannelMut(&mut red).hide_bit(false);
        assert_eq!(red, 0b1010_1010);

        let mut red = u8::MAX;
        ColorChannelMut(&mut red).hide_bit(false);
        assert_eq!(red, 0xFE);
    }

    #[test]
    fn unveil_bit_should_read_the_least_significant_bit() {
        assert!(ColorChannel(0xFF).unveil_bit());
        assert!(ColorChannel(0x01).unveil_bit());
        assert!(!ColorChannel(0xFE).unveil_bit());
        assert!(!ColorChannel(0x00).unveil_bit());
    }
}
