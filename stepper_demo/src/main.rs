#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{pac, prelude::*};
use l298n_stepper::{Direction, StepperL298N};
use stm32f7xx_hal as hal;

mod board;
use board::{L298nPins, SysTickDelay, DEMO_RPM, STEPS_PER_REV};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // RCC / clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let sysclk_hz = clocks.sysclk().raw();

    // PB7 = LD2 (blue), lit while the motor turns
    let gpiob = dp.GPIOB.split();
    let mut led = gpiob.pb7.into_push_pull_output();

    // L298N on PD12..PD15, held with the SysTick delay
    let coils = L298nPins::new(dp.GPIOD.split()).into_coils();
    let delay = SysTickDelay::new(Delay::new(cp.SYST, sysclk_hz));

    let mut motor = StepperL298N::new(STEPS_PER_REV, coils, delay).unwrap();
    motor.set_speed(DEMO_RPM);

    // One revolution each way, half a second apart
    let mut direction = Direction::Clockwise;
    loop {
        led.set_high();
        motor.step_in(direction, STEPS_PER_REV).ok();
        led.set_low();
        cortex_m::asm::delay(sysclk_hz / 2);

        direction = direction.reversed();
    }
}
