use std::io::{BufRead, Write};

use crate::{
    api::API,
    config::OutputFormat,
    entities::{PhoneNumber, Registration, Trip, PHONE_NUMBER_FORMAT},
    error::{invalid_input_error, Error},
};

const MENU: &str = "Menu:
1. Register as Rider
2. Register as Driver
3. Request Ride
4. Complete Trip
5. View Ride History
6. Display All Trips
7. Accept Ride
8. Exit
9. Start Trip";

enum Flow {
    Continue,
    Exit,
}

// End of input inside an action ends the session like "Exit".
macro_rules! read_or_exit {
    ($console:expr, $prompt:expr) => {
        match $console.prompt($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Numbered text menu over any `API` implementation.
pub struct Console<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until "Exit" or end of input. Only I/O failures are returned;
    /// every other error is printed and the loop continues.
    #[tracing::instrument(skip_all)]
    pub fn run<A: API>(&mut self, api: &mut A) -> Result<(), Error> {
        loop {
            writeln!(self.output, "{}", MENU)?;

            let line = match self.prompt("Enter your choice: ")? {
                Some(line) => line,
                None => return Ok(()),
            };

            let choice: u32 = match line.trim().parse() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            let result = match choice {
                1 => self.register_rider(api),
                2 => self.register_driver(api),
                3 => self.request_ride(api),
                4 => self.complete_trip(api),
                5 => self.view_ride_history(api),
                6 => self.display_all_trips(api),
                7 => self.accept_ride(api),
                8 => return Ok(()),
                9 => self.start_trip(api),
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    continue;
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::debug!("menu action {} failed: {}", choice, err);
                    writeln!(self.output, "Request failed: {}", err.message)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // Raw bytes so a non UTF-8 line is just bad input, not an I/O failure.
        let mut buf = vec![];
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn prompt_phone_number(&mut self) -> Result<Option<String>, Error> {
        let mut text = format!("Enter Phone Number (Format: {}): ", PHONE_NUMBER_FORMAT);

        loop {
            let raw = match self.prompt(&text)? {
                Some(raw) => raw,
                None => return Ok(None),
            };

            if PhoneNumber::is_valid(&raw) {
                return Ok(Some(raw));
            }

            text = format!(
                "Invalid format. Please enter a valid Phone Number (Format: {}): ",
                PHONE_NUMBER_FORMAT
            );
        }
    }

    fn register_rider<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        let name = read_or_exit!(self, "Enter Rider Name: ");
        let phone_number = match self.prompt_phone_number()? {
            Some(phone_number) => phone_number,
            None => return Ok(Flow::Exit),
        };

        let name = name.trim().to_string();
        api.register(Registration::Rider {
            name: name.clone(),
            phone_number,
        })?;

        writeln!(self.output, "{} Registered", name)?;
        writeln!(self.output, "Rider profile created.")?;

        Ok(Flow::Continue)
    }

    fn register_driver<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        let name = read_or_exit!(self, "Enter Driver Name: ");
        let phone_number = match self.prompt_phone_number()? {
            Some(phone_number) => phone_number,
            None => return Ok(Flow::Exit),
        };
        let vehicle = read_or_exit!(self, "Enter Vehicle Details: ");

        let name = name.trim().to_string();
        api.register(Registration::Driver {
            name: name.clone(),
            phone_number,
            vehicle: vehicle.trim().into(),
        })?;

        writeln!(self.output, "{} Registered", name)?;
        writeln!(self.output, "Driver profile created.")?;

        Ok(Flow::Continue)
    }

    fn request_ride<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        let start = read_or_exit!(self, "Enter Start Location: ");
        let destination = read_or_exit!(self, "Enter Destination: ");

        if api.riders().is_empty() {
            writeln!(self.output, "No riders registered.")?;
            return Ok(Flow::Continue);
        }

        let name = read_or_exit!(self, "Enter Rider Name: ");
        let rider = api.find_rider_by_name(name.trim())?;

        match api.request_ride(rider.id, start.trim(), destination.trim())? {
            Some(trip) => {
                writeln!(self.output, "Ride requested successfully.")?;
                writeln!(self.output, "{}", describe_trip(&*api, &trip))?;
            }
            None => writeln!(self.output, "No available drivers at the moment.")?,
        }

        Ok(Flow::Continue)
    }

    fn start_trip<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        let raw = read_or_exit!(self, "Enter the Trip ID to start: ");
        let trip = api.start_trip(parse_trip_id(&raw)?)?;

        writeln!(self.output, "Trip {} is now in progress.", trip.id)?;

        Ok(Flow::Continue)
    }

    fn complete_trip<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        let raw = read_or_exit!(self, "Enter the Trip ID to complete: ");
        let trip = api.complete_trip(parse_trip_id(&raw)?)?;

        match trip.driver_id().and_then(|id| api.find_driver(id).ok()) {
            Some(driver) => writeln!(
                self.output,
                "Trip {} completed by {}.",
                trip.id, driver.name
            )?,
            None => writeln!(self.output, "Trip {} completed.", trip.id)?,
        }

        Ok(Flow::Continue)
    }

    fn view_ride_history<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        if api.riders().is_empty() {
            writeln!(self.output, "No riders registered.")?;
            return Ok(Flow::Continue);
        }

        let name = read_or_exit!(self, "Enter Rider Name: ");
        let rider = api.find_rider_by_name(name.trim())?;
        let trips = api.ride_history(rider.id)?;

        writeln!(self.output, "Ride History:")?;
        self.print_trips(&*api, &trips)?;

        Ok(Flow::Continue)
    }

    fn display_all_trips<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        let trips = api.list_all_trips();

        writeln!(self.output, "All Trips:")?;
        self.print_trips(&*api, &trips)?;

        Ok(Flow::Continue)
    }

    fn accept_ride<A: API>(&mut self, api: &mut A) -> Result<Flow, Error> {
        if api.drivers().is_empty() {
            writeln!(self.output, "No drivers registered.")?;
            return Ok(Flow::Continue);
        }

        let name = read_or_exit!(self, "Enter Driver Name: ");
        let driver = api.find_driver_by_name(name.trim())?;

        let available = api.list_available_trips();
        if available.is_empty() {
            writeln!(self.output, "No available trips.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Available Trips:")?;
        self.print_trips(&*api, &available)?;

        let raw = read_or_exit!(self, "Enter the Trip ID to accept: ");
        let trip_id = parse_trip_id(&raw)?;

        if !available.iter().any(|trip| trip.id == trip_id) {
            writeln!(self.output, "Trip not found.")?;
            return Ok(Flow::Continue);
        }

        api.accept_ride(driver.id, trip_id)?;
        writeln!(self.output, "{} accepted the ride.", driver.name)?;

        Ok(Flow::Continue)
    }

    fn print_trips<A: API>(&mut self, api: &A, trips: &[Trip]) -> Result<(), Error> {
        match self.format {
            OutputFormat::Text => {
                for trip in trips {
                    writeln!(self.output, "{}", describe_trip(api, trip))?;
                }
            }
            OutputFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(trips)?)?;
            }
        }

        Ok(())
    }
}

fn parse_trip_id(raw: &str) -> Result<u64, Error> {
    raw.trim()
        .parse()
        .map_err(|_| invalid_input_error(format!("invalid trip id {:?}", raw)))
}

/// One-line trip summary with rider and driver names resolved.
pub fn describe_trip<A: API>(api: &A, trip: &Trip) -> String {
    let rider = api
        .find_rider(trip.rider_id)
        .map(|rider| rider.name)
        .unwrap_or_else(|_| "-".into());

    let driver = trip
        .driver_id()
        .and_then(|id| api.find_driver(id).ok())
        .map(|driver| driver.name)
        .unwrap_or_else(|| "-".into());

    format!(
        "TripID: {}, Rider: {}, Driver: {}, Start: {}, Destination: {}, Fare: {}, Status: {}",
        trip.id,
        rider,
        driver,
        trip.start_location,
        trip.destination,
        trip.fare(),
        trip.status()
    )
}
