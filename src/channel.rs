use crate::error::PlaybackError;
use crate::sound::SoundKey;

/// A playable audio resource on the page.
pub trait AudioChannel {
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    /// Seek back to the start.
    fn rewind(&mut self);
    /// Request playback. Only synchronous rejections surface here; an
    /// asynchronous refusal (autoplay policy) is the backend's to discard.
    fn play(&mut self) -> Result<(), PlaybackError>;
}

/// Zero or one channel per [`SoundKey`]. A missing channel is not an error.
#[derive(Debug)]
pub struct ChannelSet<C> {
    slots: [Option<C>; SoundKey::COUNT],
}

impl<C> ChannelSet<C> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Build from a lookup that may miss.
    pub fn from_fn(mut lookup: impl FnMut(SoundKey) -> Option<C>) -> Self {
        let mut set = Self::new();
        for k in SoundKey::ALL {
            set.slots[k.index()] = lookup(k);
        }
        set
    }

    pub fn insert(&mut self, key: SoundKey, channel: C) -> Option<C> {
        self.slots[key.index()].replace(channel)
    }

    pub fn get(&self, key: SoundKey) -> Option<&C> {
        self.slots[key.index()].as_ref()
    }

    pub fn get_mut(&mut self, key: SoundKey) -> Option<&mut C> {
        self.slots[key.index()].as_mut()
    }

    pub fn contains(&self, key: SoundKey) -> bool {
        self.slots[key.index()].is_some()
    }

    /// Present channels, in [`SoundKey::ALL`] order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SoundKey, &mut C)> {
        SoundKey::ALL
            .into_iter()
            .zip(self.slots.iter_mut())
            .filter_map(|(k, slot)| slot.as_mut().map(|c| (k, c)))
    }
}

impl<C> Default for ChannelSet<C> {
    fn default() -> Self {
        Self::new()
    }
}
