//! Request sequencing for staleness detection.
//!
//! Every load a panel starts gets a fresh [`Ticket`]. When the response
//! arrives, only the latest ticket of its channel is applied; older responses
//! would overwrite newer state and are dropped.

/// Which stream of requests a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Channel {
    /// Event cards
    #[display("event-list")]
    EventList,
    /// Generator's event select
    #[display("event-select")]
    EventSelect,
    /// Post list filter select
    #[display("event-filter")]
    EventFilter,
    /// Post cards
    #[display("post-list")]
    PostList,
    /// Post generation
    #[display("generator")]
    Generator,
    /// Event create/delete
    #[display("event-mutation")]
    EventMutation,
    /// Status change or delete from the post list
    #[display("post-mutation")]
    PostMutation,
    /// Status change of the just-generated post
    #[display("generated-status")]
    GeneratedStatus,
}

impl Channel {
    /// Whether stale responses on this channel are discarded.
    ///
    /// Mutations always apply: their alerts and follow-up reloads matter even
    /// when another mutation was issued meanwhile.
    pub fn is_guarded(self) -> bool {
        matches!(
            self,
            Channel::EventList
                | Channel::EventSelect
                | Channel::EventFilter
                | Channel::PostList
                | Channel::Generator
        )
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    /// Request stream
    pub channel: Channel,
    /// Position in that stream, starting at 1
    pub seq: u64,
}

/// Monotonic counter for one channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue the next ticket, superseding all earlier ones.
    pub fn issue(&mut self, channel: Channel) -> Ticket {
        self.latest += 1;
        Ticket {
            channel,
            seq: self.latest,
        }
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.seq == self.latest
    }
}
