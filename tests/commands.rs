use coreshell::commands::{
    AdcCommands, CatCommand, ConfigCommands, DfCommand, GpioCommands, HeapCommand, I2cCommands,
    LsCommand, PwmCommands, RestartCommand, RmCommand, VersionCommand, WriteCommand,
};
use coreshell::config::{ConfigMode, Settings};
use coreshell::error::Error;
use coreshell::hardware::{
    AdcReader, GpioControl, I2cBus, PinMode, PwmControl, SystemControl,
};
use coreshell::shell::dispatch::dispatch;
use coreshell::shell::registry::Registry;
use coreshell::storage::{self, FileStore, RamFileStore, StorageUsage};

/// Board double implementing every hardware trait plus file storage.
struct MockBoard {
    modes: [Option<PinMode>; 31],
    levels: [bool; 31],
    adc: [u16; 7],
    duty: Option<(u8, u8, u8)>,
    frequency: Option<(u8, u32)>,
    stopped: Option<u8>,
    i2c_devices: Vec<u8>,
    restarted: bool,
    store: RamFileStore<4, 16384>,
}

impl MockBoard {
    fn new() -> Self {
        Self {
            modes: [None; 31],
            levels: [false; 31],
            adc: [0; 7],
            duty: None,
            frequency: None,
            stopped: None,
            i2c_devices: Vec::new(),
            restarted: false,
            store: RamFileStore::new(),
        }
    }
}

impl GpioControl for MockBoard {
    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error> {
        self.modes[pin as usize] = Some(mode);
        Ok(())
    }

    fn write(&mut self, pin: u8, level: bool) -> Result<(), Error> {
        self.levels[pin as usize] = level;
        Ok(())
    }

    fn read(&mut self, pin: u8) -> Result<bool, Error> {
        Ok(self.levels[pin as usize])
    }
}

impl AdcReader for MockBoard {
    fn read(&mut self, channel: u8) -> Result<u16, Error> {
        Ok(self.adc[channel as usize])
    }
}

impl PwmControl for MockBoard {
    fn set_duty(&mut self, pin: u8, channel: u8, percent: u8) -> Result<(), Error> {
        self.duty = Some((pin, channel, percent));
        Ok(())
    }

    fn set_frequency(&mut self, channel: u8, hz: u32) -> Result<(), Error> {
        self.frequency = Some((channel, hz));
        Ok(())
    }

    fn stop(&mut self, channel: u8) -> Result<(), Error> {
        self.stopped = Some(channel);
        Ok(())
    }
}

impl I2cBus for MockBoard {
    fn probe(&mut self, addr: u8) -> bool {
        self.i2c_devices.contains(&addr)
    }

    fn read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Error> {
        if !self.i2c_devices.contains(&addr) {
            return Err(Error::IoError);
        }
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = 0xA0 + i as u8;
        }
        Ok(())
    }
}

impl SystemControl for MockBoard {
    fn firmware_version(&self) -> &str {
        "CorESP32 v7.0"
    }

    fn free_heap(&self) -> usize {
        150_000
    }

    fn min_free_heap(&self) -> usize {
        120_000
    }

    fn restart(&mut self) {
        self.restarted = true;
    }
}

impl FileStore for MockBoard {
    fn size(&mut self, path: &str) -> Result<usize, storage::Error> {
        self.store.size(path)
    }

    fn load(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, storage::Error> {
        self.store.load(path, buf)
    }

    fn store(&mut self, path: &str, data: &[u8]) -> Result<(), storage::Error> {
        self.store.store(path, data)
    }

    fn remove(&mut self, path: &str) -> Result<(), storage::Error> {
        self.store.remove(path)
    }

    fn usage(&mut self) -> Result<StorageUsage, storage::Error> {
        self.store.usage()
    }

    fn for_each_entry(
        &mut self,
        visit: &mut dyn FnMut(&str, usize),
    ) -> Result<(), storage::Error> {
        self.store.for_each_entry(visit)
    }
}

fn run(
    registry: &mut Registry<'_, MockBoard>,
    board: &mut MockBoard,
    line: &str,
) -> (Result<(), Error>, String) {
    let mut out = String::new();
    let result = dispatch(registry, board, line, &mut out);
    (result, out)
}

// ========================================
// GPIO
// ========================================

#[test]
fn test_gpio_mode_and_write() {
    let mut gpio = GpioCommands::new();
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(GpioCommands::spec(), &mut gpio).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "gpio:8:mode:output");
    assert_eq!(result, Ok(()));
    assert!(out.contains("GPIO8 mode set to: output"));
    assert_eq!(board.modes[8], Some(PinMode::Output));

    let (result, out) = run(&mut registry, &mut board, "gpio:8:write 1");
    assert_eq!(result, Ok(()));
    assert!(out.contains("GPIO8 = 1"));
    assert!(board.levels[8]);
}

#[test]
fn test_gpio_toggle_tracks_state() {
    let mut gpio = GpioCommands::new();
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(GpioCommands::spec(), &mut gpio).unwrap();
    let mut board = MockBoard::new();

    run(&mut registry, &mut board, "gpio:5:toggle").0.unwrap();
    assert!(board.levels[5]);
    run(&mut registry, &mut board, "gpio:5:toggle").0.unwrap();
    assert!(!board.levels[5]);
}

#[test]
fn test_gpio_read_reports_level() {
    let mut gpio = GpioCommands::new();
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(GpioCommands::spec(), &mut gpio).unwrap();
    let mut board = MockBoard::new();
    board.levels[3] = true;

    let (result, out) = run(&mut registry, &mut board, "gpio:3:read");
    assert_eq!(result, Ok(()));
    assert!(out.contains("GPIO3 = 1"));
}

#[test]
fn test_gpio_rejects_bad_arguments() {
    let mut gpio = GpioCommands::new();
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(GpioCommands::spec(), &mut gpio).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "gpio");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Usage:"));

    let (result, out) = run(&mut registry, &mut board, "gpio:55:read");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid pin: 55"));

    let (result, out) = run(&mut registry, &mut board, "gpio:8:write:7");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid value: 7"));

    let (result, out) = run(&mut registry, &mut board, "gpio:8:mode:sideways");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid mode: sideways"));

    // None of the failures touched the hardware.
    assert!(board.modes.iter().all(Option::is_none));
    assert!(board.levels.iter().all(|level| !level));
}

// ========================================
// ADC
// ========================================

#[test]
fn test_adc_read_and_voltage() {
    let mut adc = AdcCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(AdcCommands::spec(), &mut adc).unwrap();
    let mut board = MockBoard::new();
    board.adc[2] = 4095;

    let (result, out) = run(&mut registry, &mut board, "adc:2:read");
    assert_eq!(result, Ok(()));
    assert!(out.contains("ADC2 raw = 4095 (0-4095)"));

    let (result, out) = run(&mut registry, &mut board, "adc:2:voltage");
    assert_eq!(result, Ok(()));
    assert!(out.contains("ADC2 = 3300 mV (3.300 V)"));
}

#[test]
fn test_adc_rejects_bad_channel() {
    let mut adc = AdcCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(AdcCommands::spec(), &mut adc).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "adc:9:read");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid ADC channel: 9"));
}

// ========================================
// PWM
// ========================================

#[test]
fn test_pwm_duty_and_frequency() {
    let mut pwm = PwmCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(PwmCommands::spec(), &mut pwm).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "pwm:8:0:duty:50");
    assert_eq!(result, Ok(()));
    assert!(out.contains("PWM GPIO8 CH0 = 50% duty"));
    assert_eq!(board.duty, Some((8, 0, 50)));

    let (result, out) = run(&mut registry, &mut board, "pwm:8:0:freq:1000");
    assert_eq!(result, Ok(()));
    assert!(out.contains("PWM frequency set to 1000 Hz"));
    assert_eq!(board.frequency, Some((0, 1000)));

    let (result, out) = run(&mut registry, &mut board, "pwm:8:0:stop");
    assert_eq!(result, Ok(()));
    assert!(out.contains("PWM GPIO8 CH0 stopped"));
    assert_eq!(board.stopped, Some(0));
}

#[test]
fn test_pwm_rejects_out_of_range() {
    let mut pwm = PwmCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(PwmCommands::spec(), &mut pwm).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "pwm:8:0:duty:150");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid duty cycle: 150%"));
    assert_eq!(board.duty, None);

    let (result, out) = run(&mut registry, &mut board, "pwm:8:0:freq:0");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid frequency: 0 Hz"));
    assert_eq!(board.frequency, None);
}

// ========================================
// I2C
// ========================================

#[test]
fn test_i2c_scan_grid() {
    let mut i2c = I2cCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(I2cCommands::spec(), &mut i2c).unwrap();
    let mut board = MockBoard::new();
    board.i2c_devices = vec![0x3C, 0x68];

    let (result, out) = run(&mut registry, &mut board, "i2c:scan");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Scanning I2C bus..."));
    assert!(out.contains("3C"));
    assert!(out.contains("68"));
    assert!(out.contains("Found 2 device(s)"));
}

#[test]
fn test_i2c_read_hex_address() {
    let mut i2c = I2cCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(I2cCommands::spec(), &mut i2c).unwrap();
    let mut board = MockBoard::new();
    board.i2c_devices = vec![0x3C];

    let (result, out) = run(&mut registry, &mut board, "i2c:read 0x3C 2");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Read from 0x3C: A0 A1"));

    // Absent device surfaces the bus error.
    let (result, out) = run(&mut registry, &mut board, "i2c:read 0x10 1");
    assert_eq!(result, Err(Error::IoError));
    assert!(out.contains("Read failed from 0x10"));
}

#[test]
fn test_i2c_read_count_bounds() {
    let mut i2c = I2cCommands;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(I2cCommands::spec(), &mut i2c).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "i2c:read 0x3C 33");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Invalid count: 33"));
}

// ========================================
// System
// ========================================

#[test]
fn test_system_commands() {
    let mut heap = HeapCommand;
    let mut version = VersionCommand;
    let mut restart = RestartCommand;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(HeapCommand::spec(), &mut heap).unwrap();
    registry
        .register(VersionCommand::spec(), &mut version)
        .unwrap();
    registry
        .register(RestartCommand::spec(), &mut restart)
        .unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "heap");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Free Heap:     150000 bytes"));
    assert!(out.contains("Min Free Heap: 120000 bytes"));

    let (result, out) = run(&mut registry, &mut board, "version");
    assert_eq!(result, Ok(()));
    assert!(out.contains("CorESP32 v7.0"));

    let (result, _) = run(&mut registry, &mut board, "restart");
    assert_eq!(result, Ok(()));
    assert!(board.restarted);
}

// ========================================
// Config
// ========================================

#[test]
fn test_config_show_defaults() {
    let mut config = ConfigCommands::new(Settings::default());
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry
        .register(ConfigCommands::spec(), &mut config)
        .unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "config:show");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Version:     7.0"));
    assert!(out.contains("Device:      CorESP32"));
    assert!(out.contains("Mode:        MINIMAL"));
    assert!(out.contains("Console:     UART0 @ 115200 baud"));
    assert!(out.contains("Shell:       ON"));
    assert!(out.contains("Auto-Init:   DISABLED"));
}

#[test]
fn test_config_load_installs_new_record() {
    let mut config = ConfigCommands::new(Settings::default());
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry
        .register(ConfigCommands::spec(), &mut config)
        .unwrap();
    let mut board = MockBoard::new();
    board
        .store
        .store(
            "config/system.json",
            b"{\"device_name\":\"Probe1\",\"config_mode\":\"auto_init\"}",
        )
        .unwrap();

    let (result, out) = run(&mut registry, &mut board, "config:load config/system.json");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Config loaded successfully"));
    assert!(out.contains("Device:      Probe1"));
    assert!(out.contains("Mode:        AUTO_INIT"));

    drop(registry);
    assert_eq!(config.settings().device_name.as_str(), "Probe1");
    assert_eq!(config.settings().config_mode, ConfigMode::AutoInit);
}

#[test]
fn test_config_save_and_reset() {
    let mut config = ConfigCommands::new(Settings::default());
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry
        .register(ConfigCommands::spec(), &mut config)
        .unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "config:save backup.json");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Config saved successfully"));
    assert!(board.store.size("backup.json").unwrap() > 0);

    let (result, out) = run(&mut registry, &mut board, "config:reset");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Config reset to defaults"));

    let (result, _) = run(&mut registry, &mut board, "config:create-default");
    assert_eq!(result, Ok(()));
    assert!(board.store.size("config/system.json").unwrap() > 0);
}

#[test]
fn test_config_missing_filename() {
    let mut config = ConfigCommands::new(Settings::default());
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry
        .register(ConfigCommands::spec(), &mut config)
        .unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "config:load");
    assert_eq!(result, Err(Error::InvalidArgument));
    assert!(out.contains("Missing filename"));
}

// ========================================
// File storage
// ========================================

#[test]
fn test_fs_commands() {
    let mut ls = LsCommand;
    let mut cat = CatCommand::new();
    let mut write_cmd = WriteCommand;
    let mut rm = RmCommand;
    let mut df = DfCommand;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(LsCommand::spec(), &mut ls).unwrap();
    registry.register(CatCommand::spec(), &mut cat).unwrap();
    registry
        .register(WriteCommand::spec(), &mut write_cmd)
        .unwrap();
    registry.register(RmCommand::spec(), &mut rm).unwrap();
    registry.register(DfCommand::spec(), &mut df).unwrap();
    let mut board = MockBoard::new();

    let (result, out) = run(&mut registry, &mut board, "write hello notes.txt");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Written to: notes.txt"));

    let (result, out) = run(&mut registry, &mut board, "cat notes.txt");
    assert_eq!(result, Ok(()));
    assert!(out.contains("--- notes.txt ---"));
    assert!(out.contains("hello"));
    assert!(out.contains("--- End of file ---"));

    let (result, out) = run(&mut registry, &mut board, "ls");
    assert_eq!(result, Ok(()));
    assert!(out.contains("[FILE] notes.txt (6 bytes)"));
    assert!(out.contains("Total: 1 files"));

    let (result, out) = run(&mut registry, &mut board, "df");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Storage Information:"));
    assert!(out.contains("Total:     64 KB"));

    let (result, out) = run(&mut registry, &mut board, "rm notes.txt");
    assert_eq!(result, Ok(()));
    assert!(out.contains("Deleted: notes.txt"));

    let (result, out) = run(&mut registry, &mut board, "cat notes.txt");
    assert_eq!(result, Err(Error::NotFound));
    assert!(out.contains("Failed to open file: notes.txt"));
}

#[test]
fn test_fs_ls_prefix_filter() {
    let mut ls = LsCommand;
    let mut registry: Registry<'_, MockBoard> = Registry::new();
    registry.register(LsCommand::spec(), &mut ls).unwrap();
    let mut board = MockBoard::new();
    board.store.store("config/system.json", b"{}").unwrap();
    board.store.store("notes.txt", b"hi").unwrap();

    let (result, out) = run(&mut registry, &mut board, "ls config/");
    assert_eq!(result, Ok(()));
    assert!(out.contains("config/system.json"));
    assert!(!out.contains("notes.txt"));
    assert!(out.contains("Total: 1 files"));
}
