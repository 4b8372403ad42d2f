use pattern_framework::mock::{MockObserver, RecordingConsole};
use pattern_framework::{
    invoke, Command, Console, NotifyError, Observer, ObserverRegistry, Priced,
};
use proptest::prelude::*;
use std::rc::Rc;

// --- Test Subject ---

#[derive(Debug)]
struct Ticket {
    title: String,
    state: String,
    observers: ObserverRegistry<Ticket>,
}

impl Ticket {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            state: "open".to_string(),
            observers: ObserverRegistry::new(),
        }
    }

    fn transition(&mut self, state: &str) -> Result<(), NotifyError> {
        self.state = state.to_string();
        self.observers.notify(self)
    }
}

struct Announcer {
    console: RecordingConsole,
}

impl Observer<Ticket> for Announcer {
    fn update(&self, ticket: &Ticket) -> Result<(), NotifyError> {
        self.console
            .write_line(&format!("{} is now {}", ticket.title, ticket.state))?;
        Ok(())
    }
}

// --- Test Command ---

#[derive(Debug, thiserror::Error)]
enum CloseError {
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

struct CloseTicket<'a> {
    ticket: &'a mut Ticket,
}

impl Command for CloseTicket<'_> {
    type Error = CloseError;

    fn name(&self) -> &'static str {
        "close_ticket"
    }

    fn execute(&mut self) -> Result<(), CloseError> {
        self.ticket.transition("closed")?;
        Ok(())
    }
}

// --- Test Decorators ---

struct Fee(f64);

impl Priced for Fee {
    fn description(&self) -> String {
        "Fee".to_string()
    }

    fn calculate_total(&self) -> f64 {
        self.0
    }
}

struct Express<T: Priced>(T);

impl<T: Priced> Priced for Express<T> {
    fn description(&self) -> String {
        format!("{}, Express", self.0.description())
    }

    fn calculate_total(&self) -> f64 {
        self.0.calculate_total() + 10.0
    }
}

#[test]
fn test_command_drives_subject_and_observers() {
    let console = RecordingConsole::new();
    let mock = Rc::new(MockObserver::with_snapshot(|t: &Ticket| t.state.clone()));
    mock.expect_update().return_ok();

    let mut ticket = Ticket::new("Ticket 42");
    ticket.observers.add(Rc::new(Announcer {
        console: console.clone(),
    }));
    ticket.observers.add(mock.clone());

    invoke(&mut CloseTicket {
        ticket: &mut ticket,
    })
    .unwrap();

    assert_eq!(ticket.state, "closed");
    assert_eq!(console.lines(), vec!["Ticket 42 is now closed"]);
    assert_eq!(mock.calls(), vec!["closed".to_string()]);
    mock.verify();
}

#[test]
fn test_rejecting_observer_fails_command() {
    let first = Rc::new(MockObserver::<Ticket>::new());
    let second = Rc::new(MockObserver::<Ticket>::new());
    first
        .expect_update()
        .return_err(NotifyError::Rejected("frozen".to_string()));

    let mut ticket = Ticket::new("Ticket 7");
    ticket.observers.add(first.clone());
    ticket.observers.add(second.clone());

    let result = invoke(&mut CloseTicket {
        ticket: &mut ticket,
    });

    assert!(matches!(
        result,
        Err(CloseError::Notify(NotifyError::Rejected(_)))
    ));
    // State changes before the fan-out, so it sticks even when an observer fails.
    assert_eq!(ticket.state, "closed");
    assert_eq!(second.call_count(), 0);
    first.verify();
}

#[test]
fn test_decorators_nest_by_reference() {
    let fee = Fee(5.0);
    let express = Express(Express(&fee));

    assert_eq!(express.description(), "Fee, Express, Express");
    assert_eq!(express.calculate_total(), 25.0);
    // The wrapped value is still usable on its own.
    assert_eq!(fee.calculate_total(), 5.0);
}

proptest! {
    #[test]
    fn registry_notifies_each_observer_once_in_order(count in 0usize..8, state in ".*") {
        let log = RecordingConsole::new();
        let mut ticket = Ticket::new("T");
        for i in 0..count {
            let log = log.clone();
            let mock = MockObserver::with_snapshot(move |t: &Ticket| {
                let _ = log.write_line(&format!("{i}:{}", t.state));
            });
            mock.expect_update().return_ok();
            ticket.observers.add(Rc::new(mock));
        }

        ticket.transition(&state).unwrap();

        let expected: Vec<String> = (0..count).map(|i| format!("{i}:{state}")).collect();
        prop_assert_eq!(log.lines(), expected);
    }
}
