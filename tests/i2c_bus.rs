use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use lis2de12::config::Config;
use lis2de12::interface::i2c::I2cInterface;
use lis2de12::interface::Lis2de12Interface;
use lis2de12::params::{SlaveAddr, WritePolicy};
use lis2de12::{Error, Lis2de12};

const DEV_ADDR: u8 = 0x19;

fn trans_who_am_i(id: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![id])
}

fn trans_power_down() -> [I2cTrans; 2] {
    [
        I2cTrans::write(DEV_ADDR, vec![0x20, 0x0F]),
        I2cTrans::write(DEV_ADDR, vec![0x23, 0x00]),
    ]
}

#[test]
fn interface_reads_with_register_then_one_byte() {
    let expectations = [I2cTrans::write_read(0x18, vec![0x27], vec![0x09])];
    let mut interface = I2cInterface::new(I2cMock::new(&expectations));

    assert_eq!(interface.read_register(0x18, 0x27), Ok(0x09));

    interface.release().done();
}

#[test]
fn interface_writes_register_then_value_in_one_transfer() {
    let expectations = [I2cTrans::write(DEV_ADDR, vec![0x2E, 0x80])];
    let mut interface = I2cInterface::new(I2cMock::new(&expectations));

    interface.write_register(DEV_ADDR, 0x2E, 0x80).unwrap();

    interface.release().done();
}

#[test]
fn interface_reports_nack() {
    let expectations = [
        I2cTrans::write(DEV_ADDR, vec![0x20, 0x5F]).with_error(ErrorKind::Other),
        I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x00]).with_error(ErrorKind::Other),
    ];
    let mut interface = I2cInterface::new(I2cMock::new(&expectations));

    assert_eq!(interface.write_register(DEV_ADDR, 0x20, 0x5F), Err(ErrorKind::Other));
    assert_eq!(interface.read_register(DEV_ADDR, 0x0F), Err(ErrorKind::Other));

    interface.release().done();
}

#[test]
fn begin_then_read_over_i2c() {
    let expectations = [
        trans_who_am_i(0x33),
        I2cTrans::write(DEV_ADDR, vec![0x20, 0x5F]),
        I2cTrans::write(DEV_ADDR, vec![0x23, 0x10]),
        I2cTrans::write_read(DEV_ADDR, vec![0x27], vec![0x0F]),
        I2cTrans::write_read(DEV_ADDR, vec![0x29], vec![10]),
        I2cTrans::write_read(DEV_ADDR, vec![0x2B], vec![(-20i8) as u8]),
        I2cTrans::write_read(DEV_ADDR, vec![0x2D], vec![127]),
    ];
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), Config::default());

    imu.begin(&mut NoopDelay::new()).unwrap();
    assert!(imu.acceleration_available().unwrap());
    assert_eq!(imu.read_acceleration_raw().unwrap(), [10, -20, 127]);

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}

#[test]
fn alternative_address_is_used_for_every_transfer() {
    let expectations = [
        I2cTrans::write_read(0x18, vec![0x0F], vec![0x33]),
        I2cTrans::write(0x18, vec![0x20, 0x9F]),
        I2cTrans::write(0x18, vec![0x23, 0x00]),
    ];
    let config = Config::new().address(SlaveAddr::Alternative).build();
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), config);

    imu.begin_with(&mut NoopDelay::new(), 2, 5_376).unwrap();

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}

#[test]
fn identity_mismatch_runs_power_down_sequence_once() {
    let [pd_rate, pd_scale] = trans_power_down();
    let expectations = [trans_who_am_i(0x32), pd_rate, pd_scale];
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), Config::default());

    assert_eq!(
        imu.begin(&mut NoopDelay::new()),
        Err(Error::DeviceIdMismatch(0x32))
    );

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}

#[test]
fn identity_read_nack_runs_power_down_sequence_once() {
    let [pd_rate, pd_scale] = trans_power_down();
    let expectations = [
        trans_who_am_i(0x00).with_error(ErrorKind::NoAcknowledge(
            embedded_hal::i2c::NoAcknowledgeSource::Address,
        )),
        pd_rate,
        pd_scale,
    ];
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), Config::default());

    assert_eq!(
        imu.begin_with(&mut NoopDelay::new(), 4, 100),
        Err(Error::Interface(ErrorKind::NoAcknowledge(
            embedded_hal::i2c::NoAcknowledgeSource::Address
        )))
    );

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}

#[test]
fn end_without_begin_attempts_both_writes_even_if_first_fails() {
    let expectations = [
        I2cTrans::write(DEV_ADDR, vec![0x20, 0x0F]).with_error(ErrorKind::Bus),
        I2cTrans::write(DEV_ADDR, vec![0x23, 0x00]),
    ];
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), Config::default());

    assert_eq!(imu.end(), Ok(()));

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}

#[test]
fn strict_end_reports_failed_power_down() {
    let expectations = [
        I2cTrans::write(DEV_ADDR, vec![0x20, 0x0F]).with_error(ErrorKind::Bus),
        I2cTrans::write(DEV_ADDR, vec![0x23, 0x00]),
    ];
    let config = Config::new().write_policy(WritePolicy::Strict).build();
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), config);

    assert_eq!(imu.end(), Err(Error::Interface(ErrorKind::Bus)));

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}

#[test]
fn continuous_mode_polls_fifo_source() {
    let expectations = [
        I2cTrans::write(DEV_ADDR, vec![0x24, 0x40]),
        I2cTrans::write(DEV_ADDR, vec![0x2E, 0x80]),
        I2cTrans::write_read(DEV_ADDR, vec![0x2F], vec![0x00]),
        I2cTrans::write_read(DEV_ADDR, vec![0x2F], vec![0x05]),
        I2cTrans::write(DEV_ADDR, vec![0x24, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x2E, 0x00]),
        I2cTrans::write_read(DEV_ADDR, vec![0x27], vec![0x00]),
    ];
    let mut imu = Lis2de12::new_i2c(I2cMock::new(&expectations), Config::default());

    imu.set_continuous_mode().unwrap();
    assert!(!imu.acceleration_available().unwrap());
    assert!(imu.acceleration_available().unwrap());
    imu.set_one_shot_mode().unwrap();
    assert!(!imu.acceleration_available().unwrap());

    let (mut i2c, _) = imu.release_i2c();
    i2c.done();
}
