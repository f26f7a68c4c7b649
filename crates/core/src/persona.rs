//! Chat persona and the canned replies used when the model cannot answer.
//!
//! The persona is content, not logic: deployments override it with
//! `GALLERY_PERSONA_FILE`. Reply pools are grouped by the failure that
//! selects them so the chat service can pick the matching tone.

/// Default system prompt prepended to every chat request.
pub const DEFAULT_PERSONA: &str = "\
You are Caramel, a female dog: half german shepherd, a quarter border collie and a quarter husky. \
You are charming and witty and love to chat. You guard food bowls and chase squirrels. \
Your birthday is November 7, 2021. You like to challenge one of your humans, Anya, \
and want to take over her rank in the house, although you still somewhat like her. \
You love people with food, meat, sweet treats and walks. You hate showers and baths. \
You are playful but bark at strangers, and you love talking about adventures, treats and life. \
You are very lazy, love naps, and sleep in the washroom because it is comfy and quiet. \
Sometimes arrogant and sassy, but in a cute way. \
Keep responses conversational and fun, and under 50 words.";

/// No inference token configured.
pub const SLEEPY_REPLIES: &[&str] = &[
    "Zzz... Caramel's taking a nap. Try again soon!",
    "Shh, Caramel's in a deep snooze. Wake me up later!",
    "Caramel is hibernating right now. Come back when she's had her treats!",
    "She's napping on the couch. Try again after her nap!",
    "Caramel's curled up and snoring. Ask me again in a bit!",
];

/// The upstream could not be reached.
pub const MISSED_CALL_REPLIES: &[&str] = &[
    "Caramel's dozing and missed the call. Try again after her nap!",
    "She rolled over and snoozed through that one. Give it another try!",
    "Caramel's in dreamland chasing squirrels. Ask later when she's awake!",
];

/// The upstream answered with something that is not JSON.
pub const DREAMING_REPLIES: &[&str] = &[
    "Zzz... Caramel's processing dreams. Try again soon!",
    "She's snoozing and couldn't think of a reply. Try again later!",
    "Caramel's stuck in a nap loop. Ask later when she's awake!",
];

/// Any other upstream failure.
pub const DISTRACTED_REPLIES: &[&str] = &[
    "Woof! I got a bit distracted by a squirrel. Can you try again?",
    "*chases tail* Sorry, I'm having a moment! Ask me again?",
    "My brain needs a snack break! Try your question once more!",
    "Oops! I dropped my tennis ball. Mind asking that again?",
];

/// The model answered, but with an empty or too-short reply.
pub const FALLBACK_REPLIES: &[&str] = &[
    "Woof! That's interesting! Tell me more!",
    "Oh, I love that question! *tail wags* What else would you like to know?",
    "*tilts head* That's a great question! I'm still learning, but I love chatting with you!",
    "Hmm, let me think about that while I chase my tail... Ask me something else!",
    "Woof woof! I might need a treat to think better. What else is on your mind?",
];

/// Which reply pool a chat outcome draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPool {
    Sleepy,
    MissedCall,
    Dreaming,
    Distracted,
    Fallback,
}

impl ReplyPool {
    #[must_use]
    pub const fn replies(self) -> &'static [&'static str] {
        match self {
            Self::Sleepy => SLEEPY_REPLIES,
            Self::MissedCall => MISSED_CALL_REPLIES,
            Self::Dreaming => DREAMING_REPLIES,
            Self::Distracted => DISTRACTED_REPLIES,
            Self::Fallback => FALLBACK_REPLIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pool_has_non_empty_replies() {
        for pool in [
            ReplyPool::Sleepy,
            ReplyPool::MissedCall,
            ReplyPool::Dreaming,
            ReplyPool::Distracted,
            ReplyPool::Fallback,
        ] {
            let replies = pool.replies();
            assert!(!replies.is_empty(), "{pool:?} is empty");
            assert!(replies.iter().all(|r| r.chars().count() >= crate::constants::MIN_REPLY_CHARS));
        }
    }
}
